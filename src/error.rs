use std::fmt;

use magnifier_core::ConfigError;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum MagnifierError {
    Config(ConfigError),
    NoDocument,
    TargetNotFound { selector: String },
    Dom(String),
}

impl fmt::Display for MagnifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagnifierError::Config(err) => err.fmt(f),
            MagnifierError::NoDocument => write!(f, "window or document unavailable"),
            MagnifierError::TargetNotFound { selector } => {
                write!(f, "no element matches target selector {selector}")
            }
            MagnifierError::Dom(message) => write!(f, "dom call failed: {message}"),
        }
    }
}

impl std::error::Error for MagnifierError {}

impl From<ConfigError> for MagnifierError {
    fn from(err: ConfigError) -> Self {
        MagnifierError::Config(err)
    }
}

impl From<JsValue> for MagnifierError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        MagnifierError::Dom(message)
    }
}
