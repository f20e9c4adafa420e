use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::collections::HashMap;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, MountCtx};
use crate::device::GpuInit;
use crate::fps::{FpsReporter, FrameCounter, DEFAULT_REPORT_INTERVAL};
use crate::input::platform::winit::{release_held_buttons, translate_window_event};
use crate::input::{PointerBus, PointerState, Subscription};
use crate::player::{Drawn, FrameInfo, Player};
use crate::session::{DrawError, Session};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Initial inner size in physical pixels; this is the shader's `resolution`.
    pub initial_size: PhysicalSize<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shaderbox".to_string(),
            initial_size: PhysicalSize::new(800, 600),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window hosting `app` and runs until it closes.
    pub fn run<A>(initial: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(initial, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

/// Everything one window owns. Dropping it releases the session and listeners.
#[self_referencing]
struct WindowEntry {
    title: String,
    pointer_state: PointerState,
    pointer: PointerBus,
    player: Player,
    frames: FrameCounter,
    fps: FpsReporter,
    clock: FrameClock,
    subscriptions: Vec<Subscription>,

    window: Window,

    // `None` when setup failed; the window then stays blank.
    #[borrows(window)]
    #[covariant]
    session: Option<Session<'this>>,
}

/// What the runtime does with a window after handling one of its events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum WindowFate {
    Keep,
    Close,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    initial: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    windows: HashMap<WindowId, WindowEntry>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(initial: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            initial,
            gpu_init,
            app,
            windows: HashMap::new(),
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: RuntimeConfig,
    ) -> Result<WindowId> {
        let attrs = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let gpu_init = self.gpu_init.clone();
        let session_config = self.app.session_config();

        // Template errors surface here, before any GPU object exists.
        let program = self
            .app
            .program()
            .inspect_err(|e| log::error!("{}: cannot build shader program: {e}", config.title))
            .ok();

        let frames = FrameCounter::new();
        let title = config.title;

        let mut entry = WindowEntryBuilder {
            title: title.clone(),
            pointer_state: PointerState::default(),
            pointer: PointerBus::new(),
            player: Player::new(),
            fps: FpsReporter::new(frames.clone(), DEFAULT_REPORT_INTERVAL),
            frames,
            clock: FrameClock::new(),
            subscriptions: Vec::new(),
            window,
            session_builder: |w| {
                let program = program?;
                match pollster::block_on(Session::new(w, &program, gpu_init, session_config)) {
                    Ok(session) => Some(session),
                    Err(e) => {
                        log::error!("{title}: session setup failed: {e}");
                        None
                    }
                }
            },
        }
        .build();

        let app = &mut self.app;
        entry.with_mut(|fields| {
            if fields.session.is_none() {
                return;
            }

            let mut ctx = MountCtx::new(
                &mut *fields.player,
                fields.pointer,
                fields.frames,
                &mut *fields.subscriptions,
            );
            app.mount(&mut ctx);

            // `time` counts from here, not from before GPU setup.
            fields.clock.reset();
            fields.player.play(fields.window);
        });

        self.windows.insert(id, entry);
        Ok(id)
    }

    fn destroy_window_entry(&mut self, id: WindowId) {
        if let Some(mut entry) = self.windows.remove(&id) {
            entry.with_mut(|fields| teardown(fields.title, fields.player, fields.subscriptions));
        }
    }

    fn destroy_all(&mut self) {
        let ids: Vec<WindowId> = self.windows.keys().copied().collect();
        for id in ids {
            self.destroy_window_entry(id);
        }
    }
}

/// Stops the frame driver and releases listeners. Safe to repeat.
fn teardown(title: &str, player: &mut Player, subscriptions: &mut Vec<Subscription>) {
    player.stop();
    for mut sub in subscriptions.drain(..) {
        sub.release();
    }
    log::debug!("{title}: torn down");
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.windows.is_empty() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop, self.initial.clone()) {
            log::error!("failed to create initial window: {e:#}");
            self.request_exit();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        let mut next_report: Option<Instant> = None;

        for entry in self.windows.values_mut() {
            entry.with_mut(|fields| {
                if let Some(n) = fields.fps.poll(now) {
                    fields.window.set_title(&format!("{} - {n} FPS.", fields.title));
                    log::debug!("{}: {n} FPS.", fields.title);
                }

                let deadline = fields.fps.next_deadline();
                next_report = Some(next_report.map_or(deadline, |d| d.min(deadline)));
            });
        }

        // Redraw requests wake the loop on their own; this only paces FPS reports.
        match next_report {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, windows) = (&mut self.app, &mut self.windows);

        let Some(entry) = windows.get_mut(&window_id) else {
            return;
        };

        entry.with_mut(|fields| {
            if let WindowEvent::Focused(false) = event {
                for ev in release_held_buttons(fields.pointer_state) {
                    fields.pointer.dispatch(&ev);
                }
            }

            if let Some(ev) = translate_window_event(fields.pointer_state, &event) {
                fields.pointer_state.apply(&ev);
                fields.pointer.dispatch(&ev);
            }
        });

        if app.on_window_event(window_id, &event) == AppControl::Exit {
            self.destroy_all();
            self.request_exit();
            event_loop.exit();
            return;
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        let fate = match &event {
            WindowEvent::CloseRequested => WindowFate::Close,

            WindowEvent::Resized(new_size) => {
                entry.with_session_mut(|session| {
                    if let Some(session) = session {
                        session.resize(*new_size);
                    }
                });
                WindowFate::Keep
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_session_mut(|session| {
                    if let Some(session) = session {
                        session.resize(new_size);
                    }
                });
                WindowFate::Keep
            }

            WindowEvent::RedrawRequested => entry.with_mut(|fields| {
                let Some(session) = fields.session.as_mut() else {
                    return WindowFate::Keep;
                };
                if !fields.player.has_pending_frame() {
                    return WindowFate::Keep;
                }

                let size = fields.window.inner_size();
                let frame = FrameInfo {
                    width: size.width,
                    height: size.height,
                    time: fields.clock.tick(),
                };

                match fields.player.tick(session, frame, fields.window) {
                    Ok(Drawn::Presented) => {
                        fields.frames.increment();
                        WindowFate::Keep
                    }
                    Ok(Drawn::Skipped) => WindowFate::Keep,
                    Err(err @ DrawError::PayloadTooLarge { .. }) => {
                        log::error!("{}: render loop stopped: {err}", fields.title);
                        WindowFate::Keep
                    }
                    Err(err @ DrawError::SurfaceLost) => {
                        log::error!("{}: {err}, closing window", fields.title);
                        WindowFate::Close
                    }
                }
            }),

            _ => WindowFate::Keep,
        };

        if fate == WindowFate::Close {
            self.destroy_window_entry(window_id);
            if self.windows.is_empty() {
                self.request_exit();
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
