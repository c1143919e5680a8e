//! Keyboard mapping

use crate::sim::{Control, InputState, KeyTransition};

/// Map a DOM `KeyboardEvent.key` value to a control
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "ArrowLeft" => Some(Control::Left),
        "ArrowRight" => Some(Control::Right),
        "ArrowUp" => Some(Control::Jump),
        _ => None,
    }
}

/// Feed a key event into the input state. Returns false for unmapped keys.
pub fn dispatch_key(input: &mut InputState, key: &str, transition: KeyTransition) -> bool {
    match control_for_key(key) {
        Some(control) => {
            input.dispatch(control, transition);
            true
        }
        None => false,
    }
}
