use std::fmt;

/// A fragment body that cannot be assembled into a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The body was split into more than three segments.
    TooManySegments {
        /// Number of segments found after splitting on the delimiter.
        found: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::TooManySegments { found } => write!(
                f,
                "fragment template error: too many segments ({found}, at most 3 allowed)"
            ),
        }
    }
}

impl std::error::Error for TemplateError {}
