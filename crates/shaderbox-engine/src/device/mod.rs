//! GPU device + surface management.
//!
//! This module is responsible for:
//! - acquiring the wgpu Instance/Adapter/Device/Queue for a window
//! - creating & configuring the Surface for presentation
//! - acquiring frames and presenting them

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::{SetupError, SurfaceErrorAction};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
