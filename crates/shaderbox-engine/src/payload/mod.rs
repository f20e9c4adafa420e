//! Uniform payload: the float sequence streamed into the uniform buffer each frame.
//!
//! The push helpers follow WGSL uniform alignment (`f32` 4, `vec2f` 8,
//! `vec3f`/`vec4f`/`mat4x4f` 16 bytes), so pushing fields in struct order
//! reproduces the byte layout the shader expects.

mod writer;

pub use writer::{uniform_capacity_for, UniformPayload, UNIFORM_ALIGNMENT};
