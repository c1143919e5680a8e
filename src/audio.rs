//! Audio system using HTML media elements
//!
//! Sound is fire-and-forget: failures to load or play are logged once at
//! creation and otherwise ignored.

use web_sys::HtmlAudioElement;

/// Jump sound served next to the page
pub const JUMP_SOUND_URL: &str = "JumpSoundEffect.mp3";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
}

/// Audio manager for the game
pub struct AudioManager {
    jump: Option<HtmlAudioElement>,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let jump = HtmlAudioElement::new_with_src(JUMP_SOUND_URL).ok();
        if jump.is_none() {
            log::warn!("Failed to create audio element - jump sound disabled");
        }
        Self { jump, muted: false }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play a sound effect from the start, cutting off any earlier play
    pub fn play(&self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let element = match effect {
            SoundEffect::Jump => self.jump.as_ref(),
        };
        let Some(element) = element else { return };

        let _ = element.pause();
        element.set_current_time(0.0);
        // Autoplay policy may reject the promise; nothing to do about it
        let _ = element.play();
    }
}
