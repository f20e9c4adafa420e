use std::collections::HashSet;

use super::types::{MouseButton, PointerEvent};

/// Current pointer state for a single window.
///
/// Button events from the platform carry no position, so the last known
/// position is tracked here and attached to them.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Pointer position in physical pixels.
    pub position: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl PointerState {
    /// Applies an event to the tracked state.
    pub fn apply(&mut self, ev: &PointerEvent) {
        match *ev {
            PointerEvent::Down { button, x, y } => {
                self.position = Some((x, y));
                self.buttons_down.insert(button);
            }
            PointerEvent::Up { button, x, y } => {
                self.position = Some((x, y));
                self.buttons_down.remove(&button);
            }
            PointerEvent::Move { x, y } => {
                self.position = Some((x, y));
            }
            PointerEvent::Left => {
                self.position = None;
            }
        }
    }

    /// Drops held buttons, e.g. on focus loss, so a drag cannot get stuck.
    pub fn release_all(&mut self) -> Vec<MouseButton> {
        self.buttons_down.drain().collect()
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
