//! Music Player Component
//!
//! Floating music toggle and the looping `<audio>` element. If the browser
//! blocks autoplay, the next pointer or key press retries once.

use std::cell::Cell;
use std::rc::Rc;

use birthday_core::MusicState;
use leptos::ev;
use leptos::html::Audio;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::audio;
use crate::context::AppContext;

#[component]
pub fn MusicPlayer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (music, set_music) = signal(MusicState::default());
    let audio_ref = NodeRef::<Audio>::new();

    let src = ctx.config.with_value(|c| c.music_url());
    let volume = ctx.config.with_value(|c| c.music_volume);
    let enabled = Memo::new(move |_| music.with(|m| m.enabled));

    // Play or pause whenever the toggle flips (and once the element mounts)
    Effect::new(move |_| {
        let enabled = enabled.get();
        let Some(element) = audio_ref.get() else {
            return;
        };
        audio::prepare(&element, volume);

        if enabled {
            spawn_local(async move {
                match audio::play(&element).await {
                    Ok(()) => set_music.update(|m| m.playback_started()),
                    Err(err) => {
                        log::info!("autoplay blocked, waiting for input: {}", err);
                        set_music.update(|m| m.playback_blocked());
                    }
                }
            });
        } else if let Err(err) = audio::pause(&element) {
            log::warn!("pause failed: {}", err);
        }
    });

    // One-shot retry on the first pointer or key press
    Effect::new(move |_| {
        if !music.with(|m| m.wants_tap_listener()) {
            return;
        }

        let fired = Rc::new(Cell::new(false));
        let retry = move || {
            if fired.replace(true) {
                return;
            }
            let Some(element) = audio_ref.get_untracked() else {
                return;
            };
            spawn_local(async move {
                if audio::play(&element).await.is_ok() {
                    set_music.update(|m| m.playback_started());
                }
            });
        };

        let on_pointer = retry.clone();
        let pointer = window_event_listener(ev::pointerdown, move |_| on_pointer());
        let key = window_event_listener(ev::keydown, move |_| retry());

        on_cleanup(move || {
            pointer.remove();
            key.remove();
        });
    });

    view! {
        <button
            type="button"
            class="music-fab"
            aria-label="Toggle music"
            on:click=move |_| set_music.update(|m| m.toggle())
        >
            {move || music.with(|m| m.icon())}
        </button>

        <Show when=move || music.with(|m| m.show_tap_hint())>
            <p class="music-note">"Tap once to start music"</p>
        </Show>

        <audio node_ref=audio_ref src=src preload="auto" />
    }
}
