//! Hero Component
//!
//! Heading, surprise toggle and the countdown.

use leptos::prelude::*;

use super::{CountdownStrip, SurprisePanel};
use crate::context::AppContext;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (show_surprise, set_show_surprise) = signal(false);
    let name = ctx.config.with_value(|c| c.name.clone());

    view! {
        <header class="hero-panel">
            <span class="balloon balloon-left" />
            <span class="balloon balloon-right" />
            <h1>
                "Happy Birthday"
                <br />
                <span class="heart">"❤️ "</span>
                <span>
                    {name}
                    <span class="heart">"❤️"</span>
                </span>
            </h1>

            <button
                type="button"
                class="surprise-button"
                on:click=move |_| set_show_surprise.update(|open| *open = !*open)
            >
                "🎁 Open Surprise"
            </button>

            <Show when=move || show_surprise.get()>
                <SurprisePanel />
            </Show>

            <p class="countdown-title">"Countdown to your special day ✨"</p>
            <CountdownStrip />

            <Show when=move || ctx.is_birthday()>
                <p class="countdown-title">"Surprise is ready for you. Click Open Surprise 🎉🎁"</p>
            </Show>
        </header>
    }
}
