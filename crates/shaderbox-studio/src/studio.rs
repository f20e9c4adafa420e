use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use shaderbox_engine::core::{App, AppControl, MountCtx};
use shaderbox_engine::device::GpuInit;
use shaderbox_engine::session::SessionConfig;
use shaderbox_engine::template::TemplateError;
use shaderbox_engine::window::{Runtime, RuntimeConfig};

use crate::scenes::SceneKind;

/// Opens one window playing a built-in scene.
///
/// ```rust,ignore
/// Studio::new().scene(SceneKind::Mandelbulb).run()?;
/// ```
pub struct Studio {
    width: u32,
    height: u32,
    scene: SceneKind,
}

impl Studio {
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
            scene: SceneKind::default(),
        }
    }

    pub fn scene(mut self, scene: SceneKind) -> Self {
        self.scene = scene;
        self
    }

    /// Initial drawable size in physical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Runs the event loop until the window closes.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title: self.scene.title().to_string(),
            initial_size: PhysicalSize::new(self.width, self.height),
        };

        log::info!("playing scene `{}`", self.scene);
        let app = StudioApp {
            scene: self.scene.build(),
        };

        Runtime::run(config, GpuInit::default(), app)
            .with_context(|| format!("scene `{}` failed", self.scene))
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards to the scene and closes on Escape.
struct StudioApp {
    scene: Box<dyn App>,
}

impl App for StudioApp {
    fn program(&self) -> Result<String, TemplateError> {
        self.scene.program()
    }

    fn session_config(&self) -> SessionConfig {
        self.scene.session_config()
    }

    fn mount(&mut self, ctx: &mut MountCtx<'_>) {
        self.scene.mount(ctx);
    }

    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        if is_escape_press(event) {
            return AppControl::Exit;
        }
        self.scene.on_window_event(window_id, event)
    }
}

fn is_escape_press(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::KeyboardInput {
            event: KeyEvent {
                physical_key: PhysicalKey::Code(KeyCode::Escape),
                state: ElementState::Pressed,
                ..
            },
            ..
        }
    )
}
