//! Render session: one pipeline, one uniform buffer, one bind group per window.
//!
//! A session is created once per window from a complete WGSL program and then
//! streams a [`UniformPayload`](crate::payload::UniformPayload) into the
//! uniform buffer before each full-screen draw.

mod error;
mod full_screen;
mod shader;

pub use error::DrawError;
pub use full_screen::{Session, SessionConfig, DEFAULT_UNIFORM_CAPACITY};
pub use shader::{validate_program, ProgramInfo};
