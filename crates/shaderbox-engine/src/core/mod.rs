//! Scene-facing contracts.
//!
//! Scenes implement [`App`]; the window runtime owns everything per window and
//! lends it to the scene through [`MountCtx`].

mod app;
mod mount;

pub use app::{App, AppControl};
pub use mount::MountCtx;
