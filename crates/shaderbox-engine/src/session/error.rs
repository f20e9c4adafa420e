use std::fmt;

/// Failure while drawing one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The payload does not fit in the uniform buffer. Nothing was written.
    PayloadTooLarge { len: u64, capacity: u64 },
    /// The surface cannot be recovered (commonly out of memory).
    SurfaceLost,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::PayloadTooLarge { len, capacity } => write!(
                f,
                "uniform payload of {len} bytes exceeds buffer capacity of {capacity} bytes"
            ),
            DrawError::SurfaceLost => f.write_str("surface lost"),
        }
    }
}

impl std::error::Error for DrawError {}
