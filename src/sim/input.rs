//! Held-control state read by the simulation tick

use serde::{Deserialize, Serialize};

/// Logical controls the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    Left,
    Right,
    Jump,
}

/// A press or release of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Pressed,
    Released,
}

/// Current pressed status of each control (last transition wins)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Apply a single key transition
    pub fn dispatch(&mut self, control: Control, transition: KeyTransition) {
        let held = transition == KeyTransition::Pressed;
        match control {
            Control::Left => self.left = held,
            Control::Right => self.right = held,
            Control::Jump => self.jump = held,
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Jump => self.jump,
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
