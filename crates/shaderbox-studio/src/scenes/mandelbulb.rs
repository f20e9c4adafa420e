use std::cell::RefCell;
use std::rc::Rc;

use shaderbox_engine::camera::{attach_drag, OrbitCamera};
use shaderbox_engine::core::{App, MountCtx};
use shaderbox_engine::session::SessionConfig;
use shaderbox_engine::template::{build_program, TemplateError};

const FRAGMENT: &str = include_str!("../../shaders/mandelbulb.frag");

/// Fixed look parameters streamed after the camera each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulbLook {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub spike: f32,
    /// Surface hit threshold, also the normal sampling offset.
    pub detail: f32,
    pub blob: f32,
    pub color: [f32; 3],
}

impl Default for BulbLook {
    fn default() -> Self {
        Self {
            fov: 62.0,
            spike: 0.0,
            detail: 0.003,
            blob: 0.0,
            color: [0.2, 0.5, 0.1],
        }
    }
}

/// Raymarched Mandelbulb orbited by dragging with the left button.
#[derive(Debug, Default)]
pub struct Mandelbulb {
    camera: Rc<RefCell<OrbitCamera>>,
    look: BulbLook,
}

impl Mandelbulb {
    /// Declared uniform block size; the payload itself is 124 bytes.
    pub const PAYLOAD_BYTES: u64 = 128;

    pub fn new() -> Self {
        Self::default()
    }
}

impl App for Mandelbulb {
    fn program(&self) -> Result<String, TemplateError> {
        build_program(FRAGMENT)
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig::with_uniform_capacity(Self::PAYLOAD_BYTES)
    }

    fn mount(&mut self, ctx: &mut MountCtx<'_>) {
        let drag = attach_drag(ctx.pointer, Rc::clone(&self.camera));
        ctx.keep(drag);

        let camera = Rc::clone(&self.camera);
        let frames = ctx.frames.clone();
        let look = self.look;
        ctx.player.set_before_render(move |tick| {
            let frame = tick.frame();
            let camera = camera.borrow();

            let params = tick.params_mut();
            params.clear();
            params
                .push_vec2(frame.resolution())
                .push_f32(frame.time.elapsed)
                .push_mat4(&camera.view_cols())
                .push_f32(look.fov)
                .push_f32(frames.get() as f32)
                .push_f32(look.spike)
                .push_f32(look.detail)
                .push_vec3(camera.pivot.to_array())
                .push_f32(look.blob)
                .push_vec3(look.color);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use shaderbox_engine::input::{MouseButton, PointerEvent};
    use shaderbox_engine::session::validate_program;

    use super::*;
    use crate::scenes::testing::Harness;

    #[test]
    fn program_validates_with_a_128_byte_uniform_block() {
        let program = Mandelbulb::new().program().unwrap();
        let info = validate_program(&program).unwrap();
        assert_eq!(info.uniform_size, Some(Mandelbulb::PAYLOAD_BYTES));
    }

    #[test]
    fn payload_matches_the_uniform_layout() {
        let mut scene = Mandelbulb::new();
        let mut harness = Harness::mount(&mut scene);

        let floats = harness.tick(800, 600, Duration::from_secs(1));

        assert_eq!(floats.len(), 31);
        assert_eq!(&floats[0..3], &[800.0, 600.0, 1.0]);
        assert_eq!(floats[3], 0.0, "padding before the view matrix");
        assert_eq!(&floats[4..20], &OrbitCamera::default().view_cols());
        // fov, frame, spike, detail
        assert_eq!(&floats[20..24], &[62.0, 0.0, 0.0, 0.003]);
        assert_eq!(&floats[24..27], &[-1.5, 0.4, 2.0]);
        assert_eq!(floats[27], 0.0, "blob");
        assert_eq!(&floats[28..31], &[0.2, 0.5, 0.1]);
        assert!(harness.player.params().byte_len() <= Mandelbulb::PAYLOAD_BYTES);
    }

    #[test]
    fn frame_uniform_counts_completed_frames() {
        let mut scene = Mandelbulb::new();
        let mut harness = Harness::mount(&mut scene);

        for i in 0..3 {
            let floats = harness.tick(800, 600, Duration::from_millis(16 * i));
            assert_eq!(floats[21], i as f32);
        }
    }

    #[test]
    fn dragging_changes_the_streamed_view() {
        let mut scene = Mandelbulb::new();
        let mut harness = Harness::mount(&mut scene);
        let before = harness.tick(800, 600, Duration::ZERO);

        harness.pointer.dispatch(&PointerEvent::Down { button: MouseButton::Left, x: 100.0, y: 100.0 });
        harness.pointer.dispatch(&PointerEvent::Move { x: 180.0, y: 60.0 });
        harness.pointer.dispatch(&PointerEvent::Up { button: MouseButton::Left, x: 180.0, y: 60.0 });
        let after = harness.tick(800, 600, Duration::from_millis(16));

        let mut expected = OrbitCamera::default();
        expected.apply_drag(80.0, -40.0);
        assert_ne!(&before[4..20], &after[4..20]);
        assert_eq!(&after[4..20], &expected.view_cols());
    }

    #[test]
    fn releasing_subscriptions_detaches_the_camera() {
        let mut scene = Mandelbulb::new();
        let mut harness = Harness::mount(&mut scene);
        for mut sub in harness.subscriptions.drain(..) {
            sub.release();
        }

        harness.pointer.dispatch(&PointerEvent::Down { button: MouseButton::Left, x: 0.0, y: 0.0 });
        harness.pointer.dispatch(&PointerEvent::Move { x: 50.0, y: 0.0 });

        assert_eq!(scene.camera.borrow().yaw, 0.0);
    }
}
