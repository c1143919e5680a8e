//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`; there is no
//! hidden shared state, so any step can be driven from a test.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::Rect;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing every tick
    Running,
    /// Player fell out; the run is frozen for good
    GameOver,
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A jump started this tick
    Jumped,
    /// First landing on a platform (score already incremented)
    Landed { platform_id: u32, score: u32 },
    /// The run ended this tick
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// How the lookahead backfill counts generated candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LookaheadPolicy {
    /// Count every candidate, even ones rejected for overlap or spawned
    /// behind the player. Reproduces the classic behavior, which can leave
    /// fewer real platforms ahead than the lookahead asks for.
    CountCandidates,
    /// Count only accepted platforms that actually lie ahead of the player
    #[default]
    CountAccepted,
}

/// Simulation knobs that change gameplay outcomes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub lookahead: LookaheadPolicy,
    /// Drop platforms this far behind the camera (`None` keeps everything)
    pub evict_margin: Option<f32>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            lookahead: LookaheadPolicy::default(),
            evict_margin: Some(EVICT_MARGIN),
        }
    }
}

impl Rules {
    /// The unmodified classic rules: candidate counting, unbounded growth
    pub fn classic() -> Self {
        Self {
            lookahead: LookaheadPolicy::CountCandidates,
            evict_margin: None,
        }
    }
}

/// The player-controlled box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-tick velocity (dx, dy)
    pub vel: Vec2,
    pub speed: f32,
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_power: f32,
    pub is_jumping: bool,
    /// Resting on a platform top as of the last tick
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::splat(PLAYER_SIZE),
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            is_jumping: false,
            grounded: false,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Side-to-side oscillation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformMotion {
    pub move_speed: f32,
    pub amplitude: f32,
    pub original_x: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

/// A platform the player can land on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    #[serde(default)]
    pub motion: Option<PlatformMotion>,
    /// Scoring already counted for this platform (never reverts)
    #[serde(default)]
    pub landed: bool,
}

impl Platform {
    pub fn new(id: u32, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            motion: None,
            landed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Advance a moving platform one tick, bouncing inside its band
    pub fn step_motion(&mut self) {
        let Some(motion) = self.motion.as_mut() else {
            return;
        };
        self.pos.x += motion.move_speed * motion.direction;

        let min_x = motion.original_x - motion.amplitude;
        let max_x = motion.original_x + motion.amplitude;
        if self.pos.x < min_x || self.pos.x > max_x {
            motion.direction = -motion.direction;
            self.pos.x = self.pos.x.clamp(min_x, max_x);
        }
    }

    /// Rightmost x this platform can ever reach
    pub fn max_right(&self) -> f32 {
        match &self.motion {
            Some(m) => m.original_x + m.amplitude + self.size.x,
            None => self.pos.x + self.size.x,
        }
    }
}

/// Bounded FIFO of recent player positions, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    /// Record a position, evicting the oldest past `TRAIL_LENGTH`
    pub fn push(&mut self, pos: Vec2) {
        self.points.push_back(pos);
        while self.points.len() > TRAIL_LENGTH {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions from oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generator RNG, advanced only by platform generation
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Active platforms in creation order
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub trail: Trail,
    pub camera: Camera,
    pub score: u32,
    /// Best score known at start of run, raised at game over
    pub high_score: u32,
    pub rules: Rules,
    /// Next platform ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with default rules
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self::with_rules(seed, high_score, Rules::default())
    }

    pub fn with_rules(seed: u64, high_score: u32, rules: Rules) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            time_ticks: 0,
            player: Player::default(),
            platforms: Vec::new(),
            trail: Trail::default(),
            camera: Camera::default(),
            score: 0,
            high_score,
            rules,
            next_id: 1,
        };
        state.spawn_initial_platforms();
        state
    }

    /// Ground plus two floating platforms the player can reach from rest
    fn spawn_initial_platforms(&mut self) {
        let ground = Platform::new(
            self.next_platform_id(),
            0.0,
            CANVAS_HEIGHT - GROUND_HEIGHT,
            CANVAS_WIDTH,
            GROUND_HEIGHT,
        );
        let first = Platform::new(
            self.next_platform_id(),
            200.0,
            530.0,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
        );
        let second = Platform::new(
            self.next_platform_id(),
            500.0,
            500.0,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
        );
        self.platforms.extend([ground, first, second]);
    }

    /// Allocate a new platform ID
    pub fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Number of platforms whose left edge lies right of the player
    pub fn platforms_ahead(&self) -> usize {
        self.platforms
            .iter()
            .filter(|p| p.pos.x > self.player.pos.x)
            .count()
    }
}
