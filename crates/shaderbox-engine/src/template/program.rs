use super::{split_fragment, TemplateError};

/// Vertex entry point emitted by [`build_program`].
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment entry point emitted by [`build_program`].
pub const FRAGMENT_ENTRY: &str = "fs_main";

const CONSTANTS: &str = "\
const PI: f32 = 3.14159265358979;
const TWO_PI: f32 = PI * 2.0;
";

const INTERPOLATORS: &str = "\
struct Interpolators {
  @builtin(position) raster: vec4f,
  @location(0) uv: vec2f,
}
";

// Four vertices as a triangle strip covering clip space.
const VERTEX_STAGE: &str = "\
@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> Interpolators {
  var corners = array<vec2f, 4>(
    vec2f(-1.0, -1.0),
    vec2f(-1.0,  1.0),
    vec2f( 1.0, -1.0),
    vec2f( 1.0,  1.0),
  );
  let corner = corners[index];
  var output: Interpolators;
  output.raster = vec4f(corner, 0.0, 1.0);
  output.uv = corner * 0.5 + 0.5;
  return output;
}
";

/// Assembles a complete WGSL program from a fragment body.
///
/// Output order: constants, `Uniforms` (fixed `resolution` and `time`, then the
/// extra fields verbatim), the uniform binding at group 0 binding 0, helpers
/// verbatim, the vertex stage, and the fragment stage wrapping the main body.
///
/// The fragment body sees `uv` (raster position divided by resolution) and the
/// `uniforms` binding, and must return a `vec4f`.
pub fn build_program(body: &str) -> Result<String, TemplateError> {
    let segments = split_fragment(body)?;

    let mut out = String::with_capacity(
        CONSTANTS.len() + INTERPOLATORS.len() + VERTEX_STAGE.len() + body.len() + 512,
    );

    out.push_str(CONSTANTS);
    out.push('\n');

    // 16-byte aligned; the payload writer must push fields in this order.
    out.push_str("struct Uniforms {\n  resolution: vec2f,\n  time: f32,\n");
    out.push_str(segments.extra_uniforms);
    out.push_str("\n}\n\n");
    out.push_str("@group(0) @binding(0)\nvar<uniform> uniforms: Uniforms;\n\n");

    out.push_str(segments.helpers);
    out.push_str("\n\n");

    out.push_str(INTERPOLATORS);
    out.push('\n');
    out.push_str(VERTEX_STAGE);
    out.push('\n');

    out.push_str("@fragment\nfn fs_main(input: Interpolators) -> @location(0) vec4f {\n");
    out.push_str("  let uv = input.raster.xy / uniforms.resolution;\n");
    out.push_str(segments.main);
    out.push_str("\n}\n");

    Ok(out)
}
