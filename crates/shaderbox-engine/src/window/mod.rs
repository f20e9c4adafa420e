//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and one entry per window: the render session,
//! the frame driver, pointer listeners and FPS reporting.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
