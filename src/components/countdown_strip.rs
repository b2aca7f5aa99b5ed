//! Countdown Strip Component

use leptos::prelude::*;

use crate::context::AppContext;

const UNITS: [&str; 4] = ["Days", "Hrs", "Min", "Sec"];

/// Days, hours, minutes and seconds left, zero-padded
#[component]
pub fn CountdownStrip() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="counter-strip">
            {UNITS
                .iter()
                .enumerate()
                .map(|(index, unit)| {
                    let value = move || ctx.snapshot.with(|s| s.countdown.display_parts()[index].clone());
                    view! {
                        <article>
                            <strong>{value}</strong>
                            <span>{*unit}</span>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
