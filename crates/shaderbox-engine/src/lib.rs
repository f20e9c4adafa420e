//! shaderbox engine crate.
//!
//! Full-screen WGSL programs driven by a per-window frame loop: program
//! templating, the wgpu session, the frame driver, pointer input, the orbit
//! camera and FPS reporting, hosted by a winit runtime.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod template;
pub mod payload;
pub mod session;
pub mod player;
pub mod camera;
pub mod fps;
