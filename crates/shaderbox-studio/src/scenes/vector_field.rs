use std::cell::Cell;
use std::rc::Rc;

use shaderbox_engine::core::{App, MountCtx};
use shaderbox_engine::input::PointerEvent;
use shaderbox_engine::session::SessionConfig;
use shaderbox_engine::template::{build_program, TemplateError};

const FRAGMENT: &str = include_str!("../../shaders/vector_field.frag");

/// Flow of `z -> z^2 - 4` over the plane, colored by angular change.
///
/// Hovering moves the zoom: the pointer's x maps the view half-extent `scale`
/// from 3 (left edge) to 6 (right edge).
#[derive(Debug, Default)]
pub struct VectorField {
    pointer_x: Rc<Cell<f32>>,
}

impl VectorField {
    /// resolution, time, scale.
    pub const PAYLOAD_BYTES: u64 = 16;

    pub fn new() -> Self {
        Self::default()
    }

    fn scale(pointer_x: f32, width: u32) -> f32 {
        3.0 + 3.0 * pointer_x / width.max(1) as f32
    }
}

impl App for VectorField {
    fn program(&self) -> Result<String, TemplateError> {
        build_program(FRAGMENT)
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig::with_uniform_capacity(Self::PAYLOAD_BYTES)
    }

    fn mount(&mut self, ctx: &mut MountCtx<'_>) {
        let pointer_x = Rc::clone(&self.pointer_x);
        let hover = ctx.pointer.subscribe(move |event| {
            if let PointerEvent::Move { x, .. } = *event {
                pointer_x.set(x);
            }
        });
        ctx.keep(hover);

        let pointer_x = Rc::clone(&self.pointer_x);
        ctx.player.set_before_render(move |tick| {
            let frame = tick.frame();
            let params = tick.params_mut();
            params.clear();
            params
                .push_vec2(frame.resolution())
                .push_f32(frame.time.elapsed)
                .push_f32(Self::scale(pointer_x.get(), frame.width));
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use shaderbox_engine::session::validate_program;

    use super::*;
    use crate::scenes::testing::Harness;

    #[test]
    fn program_validates_with_a_sixteen_byte_uniform_block() {
        let program = VectorField::new().program().unwrap();
        let info = validate_program(&program).unwrap();
        assert_eq!(info.uniform_size, Some(VectorField::PAYLOAD_BYTES));
    }

    #[test]
    fn payload_tracks_resolution_time_and_hover() {
        let mut scene = VectorField::new();
        let mut harness = Harness::mount(&mut scene);

        let first = harness.tick(800, 600, Duration::from_millis(500));
        assert_eq!(first, [800.0, 600.0, 0.5, 3.0]);

        harness.pointer.dispatch(&PointerEvent::Move { x: 400.0, y: 10.0 });
        let second = harness.tick(800, 600, Duration::from_secs(2));
        assert_eq!(second, [800.0, 600.0, 2.0, 4.5]);
    }

    #[test]
    fn scale_follows_the_current_width() {
        assert_eq!(VectorField::scale(0.0, 1024), 3.0);
        assert_eq!(VectorField::scale(1024.0, 1024), 6.0);
        assert_eq!(VectorField::scale(10.0, 0), 33.0);
    }
}
