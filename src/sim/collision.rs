//! Axis-aligned rectangle tests
//!
//! Everything in the world is an unrotated box, so collision reduces to two
//! checks: plain overlap (used to reject generated platforms) and the landing
//! test (player crossing a platform's top edge this tick).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin at the top-left (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap on all four half-planes (touching edges do not overlap)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Strict horizontal span overlap
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}

/// Landing test for a body that has already moved by `dy` this tick.
///
/// The body lands when its bottom edge is at or above the platform top and
/// would reach or pass it after another `dy`, while the horizontal spans
/// overlap.
pub fn lands_on(body: &Rect, dy: f32, platform: &Rect) -> bool {
    let bottom = body.bottom();
    bottom <= platform.top()
        && bottom + dy >= platform.top()
        && body.overlaps_horizontally(platform)
}
