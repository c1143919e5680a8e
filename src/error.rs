//! Error types for the browser-facing glue
//!
//! The simulation itself cannot fail; only DOM access and the leaderboard
//! fetch produce errors, and both are logged rather than surfaced to play.

use thiserror::Error;

/// Failures while talking to the DOM
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `#{0}` not found")]
    MissingElement(String),
    #[error("element `#{0}` has an unexpected type")]
    WrongElementType(String),
    #[error("javascript error: {0}")]
    Js(String),
}

/// Failures while loading the leaderboard
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard request failed: {0}")]
    Fetch(String),
    #[error("leaderboard request returned HTTP {0}")]
    Status(u16),
    #[error("leaderboard data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Web(#[from] WebError),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        WebError::Js(format!("{:?}", value))
    }
}
