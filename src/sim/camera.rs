//! Horizontal follow camera

use serde::{Deserialize, Serialize};

use crate::consts::CANVAS_WIDTH;

/// Viewport offset in world units. Only scrolls horizontally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Center on the player, never scrolling left of the world origin
    pub fn follow(player_x: f32, viewport_width: f32) -> Self {
        Self {
            x: (player_x - viewport_width / 2.0).max(0.0),
        }
    }

    pub fn update(&mut self, player_x: f32) {
        *self = Self::follow(player_x, CANVAS_WIDTH);
    }

    /// World x to screen x
    #[inline]
    pub fn to_screen(&self, world_x: f32) -> f32 {
        world_x - self.x
    }
}
