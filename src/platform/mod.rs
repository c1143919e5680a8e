//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to controls)
//! - Storage (LocalStorage on web)
//! - DOM lookups

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{control_for_key, dispatch_key};
