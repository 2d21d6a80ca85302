//! Structured error types for xlstore.

/// All errors that can occur while building an XLSX export.
#[derive(Debug, thiserror::Error)]
pub enum XlstoreError {
    /// Export requested with an empty sheet list.
    #[error("No sheets to export")]
    NoSheets,

    /// Input exceeds what a non-ZIP64 archive can describe.
    #[error("ZIP archive limit exceeded: {0}")]
    ArchiveLimit(String),

    /// Report document (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while handing the file to a save target.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, XlstoreError>;

impl From<String> for XlstoreError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for XlstoreError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<XlstoreError> for wasm_bindgen::JsValue {
    fn from(e: XlstoreError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
