use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

use crate::input::{MouseButton, PointerEvent, PointerState};

/// Translates a winit `WindowEvent` into a `PointerEvent`.
///
/// Positions stay in physical pixels, the same space as the surface size the
/// shaders receive as `resolution`. Returns `None` for non-pointer events.
pub fn translate_window_event(state: &PointerState, event: &WindowEvent) -> Option<PointerEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(PointerEvent::Move {
            x: position.x as f32,
            y: position.y as f32,
        }),

        WindowEvent::CursorLeft { .. } => Some(PointerEvent::Left),

        WindowEvent::MouseInput { state: st, button, .. } => {
            let button = map_mouse_button(*button);

            // winit 0.30 button events carry no position; use the tracked one.
            // Without one there is nothing to anchor a drag to.
            let (x, y) = state.position?;

            Some(match st {
                ElementState::Pressed => PointerEvent::Down { button, x, y },
                ElementState::Released => PointerEvent::Up { button, x, y },
            })
        }

        _ => None,
    }
}

/// Synthesizes `Up` events for every held button, for focus loss.
pub fn release_held_buttons(state: &mut PointerState) -> Vec<PointerEvent> {
    let (x, y) = state.position.unwrap_or((0.0, 0.0));
    state
        .release_all()
        .into_iter()
        .map(|button| PointerEvent::Up { button, x, y })
        .collect()
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    use super::*;

    fn press() -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: unsafe { DeviceId::dummy() },
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        }
    }

    #[test]
    fn press_without_a_known_position_is_ignored() {
        let state = PointerState::default();
        assert_eq!(translate_window_event(&state, &press()), None);
    }

    #[test]
    fn press_uses_the_last_cursor_position() {
        let mut state = PointerState::default();
        let moved = WindowEvent::CursorMoved {
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(40.0, 25.0),
        };
        let ev = translate_window_event(&state, &moved).unwrap();
        state.apply(&ev);

        assert_eq!(
            translate_window_event(&state, &press()),
            Some(PointerEvent::Down { button: MouseButton::Left, x: 40.0, y: 25.0 })
        );
    }

    #[test]
    fn non_pointer_events_are_ignored() {
        let state = PointerState::default();
        assert_eq!(translate_window_event(&state, &WindowEvent::Focused(true)), None);
        assert_eq!(translate_window_event(&state, &WindowEvent::CloseRequested), None);
    }

    #[test]
    fn maps_mouse_buttons() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(7)), MouseButton::Other(7));
    }

    #[test]
    fn focus_loss_releases_every_held_button() {
        let mut state = PointerState::default();
        state.apply(&PointerEvent::Down { button: MouseButton::Left, x: 2.0, y: 3.0 });

        let released = release_held_buttons(&mut state);

        assert_eq!(
            released,
            vec![PointerEvent::Up { button: MouseButton::Left, x: 2.0, y: 3.0 }]
        );
        assert!(state.buttons_down.is_empty());
    }
}
