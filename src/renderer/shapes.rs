//! Display list generation for a single frame
//!
//! Builds the ordered draw commands for the whole scene in screen space.
//! Keeping this free of any canvas handle lets it run (and be tested)
//! natively; the backend only replays the list.

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_HEIGHT};
use crate::sim::{Camera, GameState, Trail};

/// Grey level of the oldest trail entry
const TRAIL_BASE_GREY: f32 = 138.0;

pub const HUD_FONT: &str = "20px Arial";

/// Fill colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Brown,
    Rgb(u8, u8, u8),
}

impl Color {
    /// CSS color string for a canvas fill style
    pub fn css(&self) -> String {
        match self {
            Color::Black => "black".to_string(),
            Color::Brown => "brown".to_string(),
            Color::Rgb(r, g, b) => format!("rgb({}, {}, {})", r, g, b),
        }
    }
}

/// One immediate-mode drawing operation in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    FillText {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: Color,
    },
}

/// What to include when building a frame
#[derive(Debug, Clone, Copy)]
pub struct FrameOptions {
    pub trail: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { trail: true }
    }
}

fn rect(pos: Vec2, size: Vec2, color: Color) -> DrawCommand {
    DrawCommand::FillRect { pos, size, color }
}

/// Fading grey for trail entry `index` of `len` (oldest darkest-to-lightest)
pub fn trail_color(index: usize, len: usize) -> Color {
    let fade = index as f32 / len as f32;
    let grey = ((1.0 - fade) * TRAIL_BASE_GREY).round() as u8;
    Color::Rgb(grey, grey, grey)
}

/// Trail rectangles, oldest first, each the size of the player
pub fn trail(trail: &Trail, size: Vec2, camera: &Camera) -> Vec<DrawCommand> {
    let len = trail.len();
    trail
        .iter()
        .enumerate()
        .map(|(i, p)| {
            rect(
                Vec2::new(camera.to_screen(p.x), p.y),
                size,
                trail_color(i, len),
            )
        })
        .collect()
}

/// Build the full frame: trail, player, platforms, ground, then HUD text
pub fn build_frame(state: &GameState, options: FrameOptions) -> Vec<DrawCommand> {
    let camera = &state.camera;
    let player = &state.player;

    let mut commands = Vec::with_capacity(state.trail.len() + state.platforms.len() + 6);
    commands.push(DrawCommand::Clear {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    });

    if options.trail {
        commands.extend(trail(&state.trail, player.size, camera));
    }

    commands.push(rect(
        Vec2::new(camera.to_screen(player.pos.x), player.pos.y),
        player.size,
        Color::Black,
    ));

    for platform in &state.platforms {
        commands.push(rect(
            Vec2::new(camera.to_screen(platform.pos.x), platform.pos.y),
            platform.size,
            Color::Brown,
        ));
    }

    // Ground strip only once the player is down at ground level
    let ground_top = CANVAS_HEIGHT - GROUND_HEIGHT;
    if player.pos.y >= ground_top {
        commands.push(rect(
            Vec2::new(-camera.x, ground_top),
            Vec2::new(CANVAS_WIDTH + camera.x, GROUND_HEIGHT),
            Color::Brown,
        ));
    }

    commands.push(DrawCommand::FillText {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(20.0, 30.0),
        font: HUD_FONT,
        color: Color::Black,
    });
    commands.push(DrawCommand::FillText {
        text: format!("High Score: {}", state.high_score),
        pos: Vec2::new(CANVAS_WIDTH - 160.0, 30.0),
        font: HUD_FONT,
        color: Color::Black,
    });

    commands
}
