//! Drag-to-orbit camera.
//!
//! A [`DragTracker`] turns pointer positions into per-move deltas while the
//! primary button is held; an [`OrbitCamera`] accumulates those deltas as
//! pitch/yaw around a fixed pivot and produces the view matrix streamed to the
//! shader. [`attach_drag`] wires both to a window's pointer bus.

mod drag;
mod orbit;

pub use drag::{attach_drag, DragTracker};
pub use orbit::OrbitCamera;
