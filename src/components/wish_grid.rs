//! Wish Grid Component
//!
//! Today's group of wishes, rotated per UTC day.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn WishGrid() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="message-grid">
            <For
                each=move || ctx.snapshot.with(|s| s.wishes.clone())
                key=|wish| wish.clone()
                children=move |wish| {
                    view! {
                        <article class="message-card">
                            <p>{wish}</p>
                        </article>
                    }
                }
            />
        </div>
    }
}
