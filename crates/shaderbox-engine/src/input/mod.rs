//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates window events into `PointerEvent`s and dispatches
//! them through a per-window `PointerBus`.

mod bus;
pub mod platform;
mod state;
mod types;

pub use bus::{PointerBus, Subscription};
pub use state::PointerState;
pub use types::{MouseButton, PointerEvent};
