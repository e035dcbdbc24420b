//! Error types
//!
//! The simulation itself cannot fail. Errors only come from loading
//! configuration and from wiring up the browser page.

use thiserror::Error;

/// Configuration could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// The host page is missing something the driver needs
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("no element with id `{0}`")]
    MissingElement(&'static str),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(&'static str),

    #[error("2d context unavailable")]
    NoContext,

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}
