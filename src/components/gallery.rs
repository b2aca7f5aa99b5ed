//! Gallery Component
//!
//! Renders this hour's photos in their layout slots.

use birthday_core::GalleryItem;
use leptos::prelude::*;

#[component]
pub fn Gallery(items: Memo<Vec<GalleryItem>>) -> impl IntoView {
    view! {
        <div class="gallery-grid">
            // Keyed by image so a new hour replaces the cards
            <For
                each=move || items.get()
                key=|item| item.image.clone()
                children=move |item| {
                    let class = format!("gallery-card {}", item.layout.as_str());
                    view! {
                        <figure class=class>
                            <img src=item.image alt=item.title />
                        </figure>
                    }
                }
            />
        </div>
    }
}
