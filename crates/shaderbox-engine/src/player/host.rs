use winit::window::Window;

use crate::payload::UniformPayload;
use crate::session::DrawError;

/// Host mechanism that delivers the next per-frame callback.
///
/// Implementations pace requests to the display refresh; a request made while
/// one is outstanding may be coalesced.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}

/// Outcome of a draw that did not fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Drawn {
    /// A frame reached the screen.
    Presented,
    /// Nothing was presented: zero-size surface, transient surface error, or
    /// a tick that was not due.
    Skipped,
}

/// Draw capability: copies the payload into the uniform buffer and renders once.
pub trait Renderer {
    fn draw(&mut self, payload: &UniformPayload) -> Result<Drawn, DrawError>;
}
