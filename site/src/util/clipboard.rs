//! Best-effort clipboard writes for the payment details.
//!
//! Uses `navigator.clipboard.writeText` looked up dynamically, so browsers
//! (or insecure origins) without the async clipboard API fail with an error
//! instead of a missing-binding panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Default confirmation when the caller gives none.
pub const DEFAULT_COPIED_MESSAGE: &str = "Copied to clipboard!";
/// Notice shown when the copy fails.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy. Please copy manually.";

#[derive(Debug, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Notice text for a finished copy attempt.
#[must_use]
pub fn copy_notice(result: &Result<(), ClipboardError>, message: Option<&str>) -> String {
    match result {
        Ok(()) => message.unwrap_or(DEFAULT_COPIED_MESSAGE).to_owned(),
        Err(_) => COPY_FAILED_MESSAGE.to_owned(),
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError`] when the clipboard API is missing or the
/// browser rejects the write.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let fail = |e: JsValue| ClipboardError(format!("{e:?}"));
        let window = web_sys::window().ok_or_else(|| ClipboardError("no window".to_owned()))?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(fail)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError("navigator.clipboard missing".to_owned()));
        }
        let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(fail)?
            .dyn_into::<js_sys::Function>()
            .map_err(fail)?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(fail)?
            .dyn_into::<js_sys::Promise>()
            .map_err(fail)?;
        wasm_bindgen_futures::JsFuture::from(promise).await.map_err(fail)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError("not available on server".to_owned()))
    }
}
