use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong talking to the browser. None of these are
/// fatal for the page; callers log them and fall back.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("local storage is not available: {0}")]
    StorageUnavailable(String),
    #[error("failed to read '{key}' from storage: {reason}")]
    StorageRead { key: String, reason: String },
    #[error("failed to write '{key}' to storage: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("failed to set document attribute '{attribute}': {reason}")]
    Document { attribute: String, reason: String },
    #[error("viewport observer unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("navigation to {target} failed: {reason}")]
    Navigation { target: String, reason: String },
}

/// Flattens a thrown JS value into something we can log.
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
