use std::fmt;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// Failure while creating a render session.
///
/// None of these are retried. The host is expected to leave the window blank
/// and skip starting the frame driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// No adapter compatible with the surface is exposed by the host.
    AdapterUnavailable(String),
    /// The adapter refused to create a logical device.
    DeviceUnavailable(String),
    /// The window cannot provide a drawable surface.
    SurfaceUnavailable(String),
    /// The program failed to parse or validate.
    ShaderCompile(String),
    /// The shader's uniform block does not fit in the uniform buffer.
    UniformCapacity { required: u64, capacity: u64 },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::AdapterUnavailable(reason) => write!(f, "adapter not available: {reason}"),
            SetupError::DeviceUnavailable(reason) => write!(f, "device not available: {reason}"),
            SetupError::SurfaceUnavailable(reason) => write!(f, "surface not available: {reason}"),
            SetupError::ShaderCompile(log) => write!(f, "shader compilation failed:\n{log}"),
            SetupError::UniformCapacity { required, capacity } => write!(
                f,
                "uniform block needs {required} bytes but the buffer holds {capacity}"
            ),
        }
    }
}

impl std::error::Error for SetupError {}
