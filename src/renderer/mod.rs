//! Canvas 2D rendering module
//!
//! `shapes` turns the game state into a display list; on the web the
//! `canvas` backend replays it onto a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderState;
pub use shapes::{Color, DrawCommand, FrameOptions, build_frame};
