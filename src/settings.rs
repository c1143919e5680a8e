//! Game settings and preferences
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{LookaheadPolicy, Rules};

/// How simulation ticks are paced against display refreshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FramePacing {
    /// Fixed 60 Hz ticks from an accumulator; speed is independent of the
    /// display refresh rate
    #[default]
    Fixed,
    /// One tick per animation frame; faster displays play faster
    PerRefresh,
}

impl FramePacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            FramePacing::Fixed => "Fixed",
            FramePacing::PerRefresh => "PerRefresh",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(FramePacing::Fixed),
            "per-refresh" | "perrefresh" | "refresh" => Some(FramePacing::PerRefresh),
            _ => None,
        }
    }

    /// Number of simulation ticks to run for a frame that took `dt` seconds.
    ///
    /// `Fixed` banks time in `accumulator` and drains it in `SIM_DT` steps.
    /// Time left over once `MAX_SUBSTEPS` is reached is dropped, so a stall
    /// never turns into a burst of catch-up ticks later.
    pub fn ticks_for(&self, accumulator: &mut f32, dt: f32) -> u32 {
        match self {
            FramePacing::PerRefresh => 1,
            FramePacing::Fixed => {
                *accumulator += dt.clamp(0.0, MAX_FRAME_DT);

                let mut ticks = 0;
                while *accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
                    *accumulator -= SIM_DT;
                    ticks += 1;
                }
                if ticks == MAX_SUBSTEPS {
                    *accumulator = accumulator.min(SIM_DT - f32::EPSILON);
                }
                ticks
            }
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub frame_pacing: FramePacing,

    // === Simulation ===
    pub lookahead: LookaheadPolicy,
    /// Drop platforms left far behind
    pub evict_platforms: bool,

    // === Visual Effects ===
    /// Fading player trail
    pub trail: bool,

    // === Audio ===
    pub jump_sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_pacing: FramePacing::Fixed,

            lookahead: LookaheadPolicy::CountAccepted,
            evict_platforms: true,

            trail: true,

            jump_sound: true,
        }
    }
}

impl Settings {
    /// Settings reproducing the classic game exactly
    pub fn classic() -> Self {
        Self {
            frame_pacing: FramePacing::PerRefresh,
            lookahead: LookaheadPolicy::CountCandidates,
            evict_platforms: false,
            ..Self::default()
        }
    }

    /// Simulation rules derived from these settings
    pub fn rules(&self) -> Rules {
        Rules {
            lookahead: self.lookahead,
            evict_margin: if self.evict_platforms {
                Rules::default().evict_margin
            } else {
                None
            },
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "endless_jumper_settings";

    /// Parse persisted settings, falling back to defaults on bad data
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match crate::platform::storage::get_item(Self::STORAGE_KEY) {
            Some(json) => {
                log::info!("Loaded settings from LocalStorage");
                Self::from_json(&json)
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
