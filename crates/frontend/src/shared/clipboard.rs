//! System clipboard access through the Web Clipboard API

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Write `text` to the clipboard without waiting for the result.
///
/// Failures (no window, permission denied) are only logged.
pub fn write_text(text: String) {
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("Clipboard unavailable: no window");
            return;
        };
        let clipboard = window.navigator().clipboard();
        if let Err(e) = JsFuture::from(clipboard.write_text(&text)).await {
            log::warn!("Clipboard write failed: {:?}", e);
        }
    });
}
