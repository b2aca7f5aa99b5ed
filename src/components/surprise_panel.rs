//! Surprise Panel Component
//!
//! Locked until the birthday, then links to the surprise page.

use leptos::prelude::*;

use crate::context::AppContext;

const READY_TEXT: &str = "Surprise is ready now for you 🎉🎁";
const WAITING_TEXT: &str = "Just wait until your birthday —  surprise is coming for you.🎉🎂";

#[component]
pub fn SurprisePanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let open_surprise = move |_| {
        let url = ctx.config.with_value(|c| c.surprise_url.clone());
        log::info!("opening surprise at {}", url);
        if let Err(err) = window().location().set_href(&url) {
            log::warn!("navigation to {} failed: {:?}", url, err);
        }
    };

    view! {
        <div class="surprise-panel">
            <p>{move || if ctx.is_birthday() { READY_TEXT } else { WAITING_TEXT }}</p>
            <Show when=move || ctx.is_birthday()>
                <button type="button" class="surprise-button" on:click=open_surprise>
                    "Click here"
                </button>
            </Show>
        </div>
    }
}
