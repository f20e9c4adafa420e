use crate::payload::UniformPayload;
use crate::time::FrameTime;

/// Per-tick host facts.
#[derive(Debug, Copy, Clone)]
pub struct FrameInfo {
    /// Drawable width in physical pixels, read at the start of the tick.
    pub width: u32,
    /// Drawable height in physical pixels, read at the start of the tick.
    pub height: u32,
    pub time: FrameTime,
}

impl FrameInfo {
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Context handed to `before_render` and `after_render`.
pub struct TickCtx<'a> {
    pub(super) frame: FrameInfo,
    pub(super) params: &'a mut UniformPayload,
    pub(super) stop_requested: &'a mut bool,
}

impl TickCtx<'_> {
    pub fn frame(&self) -> FrameInfo {
        self.frame
    }

    /// Current payload. Changes made in `before_render` reach this tick's draw.
    pub fn params_mut(&mut self) -> &mut UniformPayload {
        self.params
    }

    pub fn set_params(&mut self, payload: UniformPayload) {
        *self.params = payload;
    }

    /// Stops the player once this tick finishes; no further tick is scheduled.
    pub fn stop(&mut self) {
        *self.stop_requested = true;
    }
}

/// A replaceable render hook.
pub type Hook = Box<dyn FnMut(&mut TickCtx<'_>)>;
