use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type used throughout the library
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("browser document unavailable: {0}")]
    Dom(String),

    #[error("wallet request failed: {0}")]
    Wallet(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Folds a failed JS call into a message. `JsValue` carries no `Error`
    /// impl and is not `Send`, so the debug rendering is all we can keep.
    pub fn js(context: &str, value: JsValue) -> Self {
        Self::Dom(format!("{context}: {value:?}"))
    }

    pub fn wallet_js(context: &str, value: JsValue) -> Self {
        Self::Wallet(format!("{context}: {value:?}"))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
