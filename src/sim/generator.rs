//! Procedural platform generation
//!
//! Each new platform is placed relative to the newest one: a random gap to
//! the right, a random step up or down kept inside the playable band, and a
//! score-dependent chance of side-to-side motion.

use rand::Rng;

use super::state::{Platform, PlatformMotion};
use crate::consts::*;

/// Chance that a freshly generated platform moves, ramping with score
pub fn move_chance(score: u32) -> f64 {
    (MOVE_CHANCE_BASE + score as f64 * MOVE_CHANCE_PER_POINT).min(MOVE_CHANCE_MAX)
}

/// Uniform random sign (+1.0 / -1.0)
fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 }
}

/// Build the platform that follows `anchor`.
///
/// Draw order is fixed (gap, step, sign, move roll, speed, direction) so a
/// seeded RNG reproduces the same course.
pub fn next_platform<R: Rng>(anchor: &Platform, score: u32, rng: &mut R, id: u32) -> Platform {
    let x = anchor.pos.x + rng.random_range(GAP_MIN..GAP_MAX);
    let step = rng.random_range(STEP_MIN..STEP_MAX);
    let sign = random_sign(rng);
    let y = (anchor.pos.y + sign * step).clamp(BAND_TOP, BAND_BOTTOM);

    let mut platform = Platform::new(id, x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT);

    if rng.random::<f64>() < move_chance(score) {
        let move_speed = rng.random_range(MOVE_SPEED_MIN..MOVE_SPEED_MAX);
        platform.motion = Some(PlatformMotion {
            move_speed,
            amplitude: MOVE_AMPLITUDE,
            original_x: x,
            direction: random_sign(rng),
        });
    }

    platform
}

/// True if `candidate` overlaps any existing platform
pub fn overlaps_any(candidate: &Platform, platforms: &[Platform]) -> bool {
    let rect = candidate.rect();
    platforms.iter().any(|p| rect.overlaps(&p.rect()))
}
