use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback of the background track.
///
/// Autoplay policies may reject the returned promise; the rejection is only
/// logged and volume updates keep flowing to the silent element.
pub fn play(music: &web::HtmlAudioElement) {
    match music.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] play() failed: {:?}", e),
    }
}

#[inline]
pub fn set_volume(music: &web::HtmlAudioElement, volume: f64) {
    music.set_volume(volume.clamp(0.0, 1.0));
}
