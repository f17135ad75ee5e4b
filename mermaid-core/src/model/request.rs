//! A single render request, built once per user action.

use crate::error::{RenderError, Result};
use serde::Serialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use super::OutputFormat;

/// Everything the renderer needs for one diagram.
///
/// Only obtainable through [`RenderRequestBuilder::build`], so a value of this
/// type always has non-empty source text and output name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    source: String,
    output_name: String,
    format: OutputFormat,
    width: Option<NonZeroU32>,
    height: Option<NonZeroU32>,
    background: Option<String>,
    output_dir: PathBuf,
}

impl RenderRequest {
    /// Start building a request from diagram source and output name.
    pub fn builder(
        source: impl Into<String>,
        output_name: impl Into<String>,
    ) -> RenderRequestBuilder {
        RenderRequestBuilder {
            source: source.into(),
            output_name: output_name.into(),
            format: OutputFormat::default(),
            width: None,
            height: None,
            background: None,
            output_dir: None,
        }
    }

    /// Diagram source text piped to the renderer.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Output file name without extension.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn width(&self) -> Option<NonZeroU32> {
        self.width
    }

    pub fn height(&self) -> Option<NonZeroU32> {
        self.height
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full output path: `<output_dir>/<output_name>.<extension>`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.output_name, self.format.extension()))
    }
}

/// Builder for [`RenderRequest`].
#[derive(Debug, Clone)]
pub struct RenderRequestBuilder {
    source: String,
    output_name: String,
    format: OutputFormat,
    width: Option<NonZeroU32>,
    height: Option<NonZeroU32>,
    background: Option<String>,
    output_dir: Option<PathBuf>,
}

impl RenderRequestBuilder {
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn width(mut self, width: Option<NonZeroU32>) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Option<NonZeroU32>) -> Self {
        self.height = height;
        self
    }

    /// Background color, passed to the renderer verbatim. Blank means none.
    pub fn background(mut self, background: Option<impl Into<String>>) -> Self {
        self.background = background.map(Into::into);
        self
    }

    /// Output directory. Defaults to the current working directory.
    pub fn output_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.output_dir = dir.map(Into::into);
        self
    }

    /// Check required fields and produce the request.
    pub fn build(self) -> Result<RenderRequest> {
        let source = self.source.trim();
        if source.is_empty() {
            return Err(RenderError::MissingField {
                field: "source text",
            });
        }

        let output_name = self.output_name.trim();
        if output_name.is_empty() {
            return Err(RenderError::MissingField {
                field: "output name",
            });
        }

        let background = self
            .background
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        let output_dir = match self.output_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        Ok(RenderRequest {
            source: source.to_string(),
            output_name: output_name.to_string(),
            format: self.format,
            width: self.width,
            height: self.height,
            background,
            output_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_source_rejected() {
        let err = RenderRequest::builder("   \n", "diagram").build().unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingField {
                field: "source text"
            }
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = RenderRequest::builder("graph TD\n A-->B", "")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingField {
                field: "output name"
            }
        ));
    }

    #[test]
    fn test_source_checked_before_name() {
        let err = RenderRequest::builder("", "").build().unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingField {
                field: "source text"
            }
        ));
    }

    #[test]
    fn test_output_path() {
        let request = RenderRequest::builder("graph TD\n A-->B", "diagram")
            .format(OutputFormat::Svg)
            .output_dir(Some("/tmp"))
            .build()
            .unwrap();
        assert_eq!(request.output_path(), PathBuf::from("/tmp/diagram.svg"));
    }

    #[test]
    fn test_fields_trimmed() {
        let request = RenderRequest::builder("  graph TD\n A-->B \n", " diagram ")
            .background(Some("  red "))
            .output_dir(Some("/tmp"))
            .build()
            .unwrap();
        assert_eq!(request.source(), "graph TD\n A-->B");
        assert_eq!(request.output_name(), "diagram");
        assert_eq!(request.background(), Some("red"));
    }

    #[test]
    fn test_blank_background_is_absent() {
        let request = RenderRequest::builder("graph TD", "d")
            .background(Some("   "))
            .build()
            .unwrap();
        assert_eq!(request.background(), None);
    }

    #[test]
    fn test_default_output_dir_is_cwd() {
        let request = RenderRequest::builder("graph TD", "d").build().unwrap();
        assert_eq!(request.output_dir(), std::env::current_dir().unwrap());
        assert_eq!(request.format(), OutputFormat::Png);
    }

    #[test]
    fn test_empty_output_dir_falls_back_to_cwd() {
        let request = RenderRequest::builder("graph TD", "d")
            .output_dir(Some(""))
            .build()
            .unwrap();
        assert_eq!(request.output_dir(), std::env::current_dir().unwrap());
    }
}
