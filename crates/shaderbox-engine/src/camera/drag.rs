use std::cell::RefCell;
use std::rc::Rc;

use crate::input::{MouseButton, PointerBus, PointerEvent, Subscription};

use super::OrbitCamera;

/// Converts absolute pointer positions into deltas between consecutive moves.
#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    last: Option<(f32, f32)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Starts a drag at the given position.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.last = Some((x, y));
    }

    /// Returns the delta since the previous position, or `None` outside a drag.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let (px, py) = self.last?;
        self.last = Some((x, y));
        Some((x - px, y - py))
    }

    pub fn pointer_up(&mut self) {
        self.last = None;
    }
}

/// Subscribes a drag tracker feeding `camera` to `bus`.
///
/// Only the left button drags. Leaving the window ends the drag, so a release
/// outside the window cannot leave it stuck.
pub fn attach_drag(bus: &PointerBus, camera: Rc<RefCell<OrbitCamera>>) -> Subscription {
    let mut tracker = DragTracker::new();

    bus.subscribe(move |event| match *event {
        PointerEvent::Down { button: MouseButton::Left, x, y } => tracker.pointer_down(x, y),
        PointerEvent::Move { x, y } => {
            if let Some((dx, dy)) = tracker.pointer_move(x, y) {
                camera.borrow_mut().apply_drag(dx, dy);
            }
        }
        PointerEvent::Up { button: MouseButton::Left, .. } | PointerEvent::Left => {
            tracker.pointer_up()
        }
        _ => {}
    })
}
