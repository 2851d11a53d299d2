use alloc::string::String;
use core::fmt;

/// Errors reported by the framing, transform and synthesis entry points.
///
/// Every variant is raised before any transform work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StdctError {
    /// `frame_length` was zero.
    InvalidFrameLength,
    /// `frame_step` was zero.
    InvalidFrameStep,
    /// The frame length passed to `isdct` disagrees with the coefficient matrix.
    FrameLengthMismatch { expected: usize, actual: usize },
    /// The window name is not one of the supported window kinds.
    UnknownWindow(String),
    /// Buffer length does not match the declared shape, or batch rows differ in length.
    ShapeMismatch,
}

impl fmt::Display for StdctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StdctError::InvalidFrameLength => f.write_str("frame_length must be positive"),
            StdctError::InvalidFrameStep => f.write_str("frame_step must be positive"),
            StdctError::FrameLengthMismatch { expected, actual } => write!(
                f,
                "frame_length {expected} does not match coefficient length {actual}"
            ),
            StdctError::UnknownWindow(name) => write!(f, "unknown window function `{name}`"),
            StdctError::ShapeMismatch => f.write_str("data length does not match shape"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StdctError {}
