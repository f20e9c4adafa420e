//! Frame driver.
//!
//! A [`Player`] owns the uniform payload and three replaceable slots
//! (payload, `before_render`, `after_render`). Each tick runs
//! `before_render`, draws the payload, runs `after_render` and asks the host
//! for the next frame. The host supplies the per-frame callback through
//! [`FrameScheduler`] and the draw capability through [`Renderer`].
//!
//! Everything here is single-threaded: hooks, pointer handlers and ticks run
//! to completion one after another on the event loop thread.

mod host;
mod driver;
mod tick;

pub use host::{Drawn, FrameScheduler, Renderer};
pub use driver::{Player, PlayerState};
pub use tick::{FrameInfo, Hook, TickCtx};
