//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per step, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (platform creation order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod generator;
pub mod input;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{Rect, lands_on};
pub use generator::{move_chance, next_platform, overlaps_any};
pub use input::{Control, InputState, KeyTransition};
pub use state::{
    GameEvent, GamePhase, GameState, LookaheadPolicy, Platform, PlatformMotion, Player, Rules,
    Trail,
};
pub use tick::{backfill_platforms, evict_platforms, tick};
