//! Result of one renderer invocation and its user-facing notice.

use crate::error::RenderError;
use serde::Serialize;
use std::path::PathBuf;

/// How a render attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// Renderer exited with status zero.
    Success { output_path: PathBuf, stdout: String },
    /// Renderer ran but exited non-zero.
    ToolError { stderr: String, command_line: String },
    /// Renderer executable could not be resolved.
    ToolNotFound,
    /// Any other spawn or IO failure.
    UnexpectedError { message: String },
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Success { .. })
    }

    /// Map the outcome to the message shown to the user.
    pub fn notice(&self) -> Notice {
        match self {
            RenderOutcome::Success {
                output_path,
                stdout,
            } => Notice::info(
                "Diagram created",
                format!(
                    "Diagram created successfully:\n{}\n\nOutput:\n{}",
                    output_path.display(),
                    stdout
                ),
            ),
            RenderOutcome::ToolError {
                stderr,
                command_line,
            } => Notice::error(
                "Render failed",
                format!(
                    "The renderer reported an error:\n{}\n\nCommand:\n{}",
                    stderr, command_line
                ),
            ),
            RenderOutcome::ToolNotFound => Notice::error(
                "Renderer not found",
                "mmdc command not found. Make sure the Mermaid CLI \
                 (@mermaid-js/mermaid-cli) is installed and on your PATH.",
            ),
            RenderOutcome::UnexpectedError { message } => Notice::error(
                "Unexpected error",
                format!("An unexpected error occurred: {}", message),
            ),
        }
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&RenderError> for Notice {
    fn from(err: &RenderError) -> Self {
        match err {
            RenderError::MissingField { field } => {
                Notice::error("Missing input", format!("Please enter the {}.", field))
            }
            other => Notice::error("Error", other.to_string()),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}
