use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::session::SessionConfig;
use crate::template::TemplateError;

use super::MountCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Scene contract implemented by higher layers.
///
/// The runtime asks for the program and session configuration, creates the
/// session, calls [`mount`](Self::mount) once, then plays the player.
pub trait App {
    /// Complete WGSL program, usually built with [`crate::template::build_program`].
    fn program(&self) -> Result<String, TemplateError>;

    fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
    }

    /// Installs hooks and pointer listeners for one window.
    ///
    /// Only called once the session exists; a window whose setup failed is
    /// never mounted.
    fn mount(&mut self, ctx: &mut MountCtx<'_>);

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }
}
