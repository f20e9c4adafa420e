//! Frames-per-second reporting.
//!
//! A [`FrameCounter`] is bumped once per completed frame by an `after_render`
//! hook; an [`FpsReporter`] samples it on a fixed interval and reports the
//! number of frames completed since the previous sample.

mod counter;
mod reporter;

pub use counter::FrameCounter;
pub use reporter::{FpsReporter, DEFAULT_REPORT_INTERVAL};
