//! Output formats understood by the renderer.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// File format of the rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
    Svg,
    Pdf,
}

impl OutputFormat {
    /// All supported formats, in the order they are offered to users.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Png,
        OutputFormat::Jpg,
        OutputFormat::Svg,
        OutputFormat::Pdf,
    ];

    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" => Ok(OutputFormat::Jpg),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(RenderError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!(" SVG ".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("Pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
    }

    #[test]
    fn test_reject_unknown_format() {
        let err = "jpeg".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, RenderError::InvalidFormat { ref value } if value == "jpeg"));
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_display_matches_extension() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string(), format.extension());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Svg).unwrap();
        assert_eq!(json, "\"svg\"");
    }
}
