//! Audio Element Bindings
//!
//! Thin async wrappers over `HtmlMediaElement` playback.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Request playback; resolves to `Err` when the browser blocks autoplay
pub async fn play(audio: &HtmlMediaElement) -> Result<(), String> {
    let promise = audio.play().map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

pub fn pause(audio: &HtmlMediaElement) -> Result<(), String> {
    audio.pause().map_err(js_error)
}

/// Looping background track at the given volume
pub fn prepare(audio: &HtmlMediaElement, volume: f64) {
    audio.set_loop(true);
    audio.set_volume(volume);
}
