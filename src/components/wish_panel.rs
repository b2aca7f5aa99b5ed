//! Make-a-Wish Component
//!
//! Cake with a candle toggle.

use leptos::prelude::*;

#[component]
pub fn WishPanel() -> impl IntoView {
    let (candles_lit, set_candles_lit) = signal(false);

    view! {
        <article class="wish-panel">
            <div class="cake">{move || if candles_lit.get() { "🎂✨" } else { "🎂" }}</div>
            <p>"Close your eyes and smile..."</p>
            <button
                type="button"
                class="surprise-button"
                on:click=move |_| set_candles_lit.update(|lit| *lit = !*lit)
            >
                {move || if candles_lit.get() { "Candles Are Glowing ✨" } else { "Light Candles 🕯️" }}
            </button>
        </article>
    }
}
