//! Error types for building requests and talking to the renderer.

use thiserror::Error;

/// Error codes for render failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required request field is empty (-1)
    MissingField = -1,
    /// Output format outside the supported set (-2)
    InvalidFormat = -2,
    /// Renderer executable could not be found (E100)
    ToolNotFound = 100,
    /// Renderer ran and reported failure (E101)
    ToolFailed = 101,
    /// Any other IO failure (E200)
    Io = 200,
}

/// Main error type for the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid output format '{value}': expected one of png, jpg, svg, pdf")]
    InvalidFormat { value: String },

    #[error("mmdc not found. Attempted paths:\n{}", .attempted.join("\n"))]
    ToolNotFound { attempted: Vec<String> },

    #[error("Renderer exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RenderError::MissingField { .. } => ErrorCode::MissingField,
            RenderError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            RenderError::ToolNotFound { .. } => ErrorCode::ToolNotFound,
            RenderError::ToolFailed { .. } => ErrorCode::ToolFailed,
            RenderError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
