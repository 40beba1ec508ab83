use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("failed to attach {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("anchor lookup failed: {0}")]
    AnchorQuery(String),

    #[error("reveal-on-scroll init failed: {0}")]
    Reveal(String),
}

/// Best-effort text for a thrown JS value.
pub fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
