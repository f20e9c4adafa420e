//! Shader template builder.
//!
//! Turns a fragment body into a complete WGSL program: a fixed uniform
//! preamble, optional caller helpers, a full-screen triangle-strip vertex
//! stage, and a fragment stage that splices the body in verbatim.
//!
//! Body format:
//!
//! ```text
//! <extra uniform fields>
//! ---
//! <helper functions>
//! ---
//! <fragment main body>
//! ```
//!
//! Both leading segments are optional. No WGSL validation happens here.

mod error;
mod program;
mod split;

pub use error::TemplateError;
pub use program::{build_program, FRAGMENT_ENTRY, VERTEX_ENTRY};
pub use split::{split_fragment, FragmentSegments, SEGMENT_DELIMITER};
