//! Assembly of the mmdc command line.

use crate::config::{
    FLAG_BACKGROUND, FLAG_HEIGHT, FLAG_INPUT, FLAG_OUTPUT, FLAG_WIDTH, STDIN_MARKER,
};
use crate::model::RenderRequest;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A fully assembled renderer invocation.
///
/// Argument order is fixed: input marker, output path, then width, height and
/// background when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl RenderCommand {
    /// Assemble the invocation for `request`.
    pub fn new(program: impl Into<PathBuf>, request: &RenderRequest) -> Self {
        let mut cmd = Self {
            program: program.into(),
            args: Vec::new(),
        };

        cmd.push(FLAG_INPUT, STDIN_MARKER);
        cmd.push(FLAG_OUTPUT, request.output_path());

        if let Some(width) = request.width() {
            cmd.push(FLAG_WIDTH, width.to_string());
        }
        if let Some(height) = request.height() {
            cmd.push(FLAG_HEIGHT, height.to_string());
        }
        if let Some(background) = request.background() {
            cmd.push(FLAG_BACKGROUND, background);
        }

        cmd
    }

    fn push(&mut self, flag: &str, value: impl Into<OsString>) {
        self.args.push(OsString::from(flag));
        self.args.push(value.into());
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program and arguments joined by single spaces.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build a process command with all standard streams piped.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl std::fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutputFormat;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroU32;

    fn request(format: OutputFormat) -> crate::model::RenderRequestBuilder {
        RenderRequest::builder("graph TD\n A-->B", "diagram")
            .format(format)
            .output_dir(Some("/tmp"))
    }

    fn count(cmd: &RenderCommand, flag: &str) -> usize {
        cmd.args().iter().filter(|a| *a == flag).count()
    }

    #[cfg(unix)]
    #[test]
    fn test_minimal_command() {
        let req = request(OutputFormat::Svg).build().unwrap();
        let cmd = RenderCommand::new("mmdc", &req);
        assert_eq!(cmd.command_line(), "mmdc -i - -o /tmp/diagram.svg");
    }

    #[cfg(unix)]
    #[test]
    fn test_width_and_background() {
        let req = request(OutputFormat::Png)
            .width(NonZeroU32::new(800))
            .background(Some("red"))
            .build()
            .unwrap();
        let cmd = RenderCommand::new("mmdc", &req);
        assert_eq!(cmd.command_line(), "mmdc -i - -o /tmp/diagram.png -w 800 -b red");
    }

    #[cfg(unix)]
    #[test]
    fn test_all_optional_flags_in_order() {
        let req = request(OutputFormat::Pdf)
            .width(NonZeroU32::new(1024))
            .height(NonZeroU32::new(768))
            .background(Some("#ffffff"))
            .build()
            .unwrap();
        let cmd = RenderCommand::new("mmdc", &req);
        assert_eq!(
            cmd.command_line(),
            "mmdc -i - -o /tmp/diagram.pdf -w 1024 -H 768 -b #ffffff"
        );
    }

    #[test]
    fn test_flags_appear_once_each() {
        let req = request(OutputFormat::Jpg)
            .width(NonZeroU32::new(10))
            .height(NonZeroU32::new(20))
            .background(Some("transparent"))
            .build()
            .unwrap();
        let cmd = RenderCommand::new("mmdc", &req);
        for flag in ["-i", "-o", "-w", "-H", "-b"] {
            assert_eq!(count(&cmd, flag), 1, "flag {}", flag);
        }
    }

    #[test]
    fn test_absent_flags_omitted() {
        let req = request(OutputFormat::Png).height(NonZeroU32::new(600)).build().unwrap();
        let cmd = RenderCommand::new("mmdc", &req);
        assert_eq!(count(&cmd, "-w"), 0);
        assert_eq!(count(&cmd, "-b"), 0);
        assert_eq!(count(&cmd, "-H"), 1);
        assert_eq!(cmd.args().len(), 6);
    }

    #[test]
    fn test_output_value_is_request_path() {
        let req = request(OutputFormat::Svg).build().unwrap();
        let cmd = RenderCommand::new("mmdc", &req);
        assert_eq!(cmd.args()[3], req.output_path().into_os_string());
    }

    #[test]
    fn test_custom_program() {
        let req = request(OutputFormat::Svg).build().unwrap();
        let cmd = RenderCommand::new("/opt/node/bin/mmdc", &req);
        assert!(cmd.command_line().starts_with("/opt/node/bin/mmdc -i - "));
        assert_eq!(cmd.program(), Path::new("/opt/node/bin/mmdc"));
    }
}
