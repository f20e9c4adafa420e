use super::TemplateError;

/// Literal token separating the segments of a fragment body.
pub const SEGMENT_DELIMITER: &str = "---";

/// Segments of a fragment body, borrowed verbatim from the input.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FragmentSegments<'a> {
    /// Extra fields appended to the `Uniforms` struct.
    pub extra_uniforms: &'a str,
    /// Helper declarations emitted at module scope.
    pub helpers: &'a str,
    /// Body of the fragment entry point.
    pub main: &'a str,
}

/// Splits `body` on [`SEGMENT_DELIMITER`].
///
/// - no delimiter: everything is the main body
/// - one delimiter: `extra_uniforms`, `main`
/// - two delimiters: `extra_uniforms`, `helpers`, `main`
///
/// Segments are not trimmed.
pub fn split_fragment(body: &str) -> Result<FragmentSegments<'_>, TemplateError> {
    let parts: Vec<&str> = body.split(SEGMENT_DELIMITER).collect();

    match parts[..] {
        [main] => Ok(FragmentSegments {
            main,
            ..FragmentSegments::default()
        }),
        [extra_uniforms, main] => Ok(FragmentSegments {
            extra_uniforms,
            helpers: "",
            main,
        }),
        [extra_uniforms, helpers, main] => Ok(FragmentSegments {
            extra_uniforms,
            helpers,
            main,
        }),
        _ => Err(TemplateError::TooManySegments { found: parts.len() }),
    }
}
