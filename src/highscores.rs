//! Best score across runs
//!
//! Stored in LocalStorage as a bare decimal integer under `highScore`.

use serde::{Deserialize, Serialize};

/// The persisted best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "highScore";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Parse a stored value; anything unreadable counts as no score
    pub fn parse(raw: Option<&str>) -> Self {
        let best = raw
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self { best }
    }

    /// Raise the best score if `score` beats it. Returns true when raised.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let raw = crate::platform::storage::get_item(Self::STORAGE_KEY);
        let score = Self::parse(raw.as_deref());
        log::info!("Loaded high score {}", score.best);
        score
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if crate::platform::storage::set_item(Self::STORAGE_KEY, &self.best.to_string()) {
            log::info!("High score saved ({})", self.best);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
