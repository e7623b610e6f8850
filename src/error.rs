// Typed errors for the browser glue. Gameplay itself has no error paths.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("canvas element '{0}' not found")]
    CanvasNotFound(String),

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("failed to load asset '{url}'")]
    AssetLoad { url: String },

    #[error("background tile width must be positive and finite, got {0}")]
    InvalidTileWidth(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("game already started")]
    AlreadyStarted,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GameError::AssetLoad { url: "gtm.png".to_string() };
        assert!(err.to_string().contains("gtm.png"));
        let err = GameError::InvalidTileWidth(0.0);
        assert!(err.to_string().contains("positive"));
    }
}
