//! Endless Jumper - an endless side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, landings, generation, camera)
//! - `renderer`: Display list building and the Canvas 2D backend
//! - `platform`: Browser/native platform abstraction
//! - `highscores`: The persisted best score
//! - `leaderboard`: Static leaderboard records
//! - `settings`: Player-facing options and simulation rules

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod highscores;
pub mod leaderboard;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{LeaderboardError, WebError};
pub use highscores::HighScore;
pub use settings::{FramePacing, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death;
    /// `MAX_SUBSTEPS * SIM_DT` must cover `MAX_FRAME_DT`
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player defaults (per-tick units)
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const GRAVITY: f32 = 0.8;
    /// Negative is upward
    pub const JUMP_POWER: f32 = -12.0;

    /// Number of past positions kept for the trail
    pub const TRAIL_LENGTH: usize = 20;

    /// Platforms required ahead of the player at all times
    pub const LOOKAHEAD: usize = 2;
    /// Candidates tried per tick before backfill gives up
    pub const MAX_GENERATION_ATTEMPTS: u32 = 64;

    /// Generated platform geometry
    pub const PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const GAP_MIN: f32 = 250.0;
    pub const GAP_MAX: f32 = 350.0;
    pub const STEP_MIN: f32 = 25.0;
    pub const STEP_MAX: f32 = 60.0;
    /// Playable vertical band for generated platforms
    pub const BAND_TOP: f32 = 20.0;
    pub const BAND_BOTTOM: f32 = CANVAS_HEIGHT - GROUND_HEIGHT - 20.0;

    /// Moving platform chance ramps from base toward the cap as score grows
    pub const MOVE_CHANCE_BASE: f64 = 0.2;
    pub const MOVE_CHANCE_PER_POINT: f64 = 1.0 / 1000.0;
    pub const MOVE_CHANCE_MAX: f64 = 0.5;
    pub const MOVE_SPEED_MIN: f32 = 0.2;
    pub const MOVE_SPEED_MAX: f32 = 0.8;
    pub const MOVE_AMPLITUDE: f32 = 80.0;

    /// Default distance behind the camera past which platforms are dropped
    pub const EVICT_MARGIN: f32 = 2.0 * CANVAS_WIDTH;
}
