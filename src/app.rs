//! Birthday Page App
//!
//! Owns the page clock. One interval updates the reference timestamp; the
//! countdown and wishes follow every tick, the gallery only when the hour
//! changes.

use std::time::Duration;

use birthday_core::PageSnapshot;
use chrono::Local;
use leptos::prelude::*;

use crate::components::{Gallery, Hero, MusicPlayer, WishGrid, WishPanel};
use crate::config::load_config;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let tick = Duration::from_millis(u64::from(config.tick_millis));
    let config = StoredValue::new(config);

    // Single writer of the reference timestamp
    let (now, set_now) = signal(Local::now());
    match set_interval_with_handle(move || set_now.set(Local::now()), tick) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::error!("failed to start page clock: {:?}", err),
    }

    let snapshot = Memo::new(move |_| config.with_value(|c| PageSnapshot::at(c, &now.get())));
    let hour = Memo::new(move |_| snapshot.with(|s| s.hour));
    let gallery = Memo::new(move |_| {
        hour.track();
        config.with_value(|c| PageSnapshot::gallery(c, &now.get_untracked()))
    });

    provide_context(AppContext::new(config, snapshot));

    view! {
        <main class="birthday-theme">
            <div class="overlay-sparkles" />
            <section class="birthday-wrapper">
                <Hero />

                <section class="content-panel">
                    <h2 class="section-title">"A Special Message"</h2>
                    <WishGrid />

                    <h2 class="section-title">"Photo Gallery"</h2>
                    <Gallery items=gallery />

                    <h2 class="section-title">"Make a Wish"</h2>
                    <WishPanel />

                    <footer class="footer-note">"Made by a mad man, just for you ❤️"</footer>
                </section>

                <MusicPlayer />
            </section>
        </main>
    }
}
