//! Configuration constants and settings for the renderer.

use std::path::PathBuf;

/// Default renderer executable name.
pub const DEFAULT_PROGRAM: &str = "mmdc";

/// Environment variable that overrides the renderer executable.
pub const PROGRAM_ENV_VAR: &str = "MMDC_PATH";

/// Input flag.
pub const FLAG_INPUT: &str = "-i";

/// Input value meaning "read from standard input".
pub const STDIN_MARKER: &str = "-";

/// Output path flag.
pub const FLAG_OUTPUT: &str = "-o";

/// Width flag (pixels).
pub const FLAG_WIDTH: &str = "-w";

/// Height flag (pixels). Upper case, `-h` is help in mmdc.
pub const FLAG_HEIGHT: &str = "-H";

/// Background color flag.
pub const FLAG_BACKGROUND: &str = "-b";

/// Version flag used when probing a candidate executable.
pub const FLAG_VERSION: &str = "--version";

/// Default output file name (without extension).
pub const DEFAULT_OUTPUT_NAME: &str = "mermaid_diagram";

/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "transparent";

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Program name or path used to launch the renderer.
    pub program: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

impl RendererConfig {
    /// Create a configuration for a specific program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build a configuration from `MMDC_PATH`, falling back to `mmdc`.
    pub fn from_env() -> Self {
        match std::env::var_os(PROGRAM_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }
}

/// Platform-specific npm binary name.
pub fn npm_binary_name() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Fallback renderer locations for the current platform.
///
/// These are the usual places a global `npm install -g @mermaid-js/mermaid-cli`
/// ends up when the install directory is not on `PATH`.
pub fn fallback_programs() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from("mmdc.cmd"));
        if let Some(home) = std::env::var_os("USERPROFILE") {
            let npm = PathBuf::from(home)
                .join("AppData")
                .join("Roaming")
                .join("npm");
            paths.push(npm.join("mmdc.cmd"));
            paths.push(npm.join("mmdc"));
        }
        if let Some(appdata) = std::env::var_os("APPDATA") {
            paths.push(PathBuf::from(appdata).join("npm").join("mmdc.cmd"));
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            paths.push(home.join(".npm-global").join("bin").join(DEFAULT_PROGRAM));
            paths.push(home.join(".local").join("bin").join(DEFAULT_PROGRAM));
            if cfg!(target_os = "linux") {
                paths.push(home.join("bin").join(DEFAULT_PROGRAM));
            }
        }
        paths.push(PathBuf::from("/usr/local/bin").join(DEFAULT_PROGRAM));
        if cfg!(target_os = "macos") {
            paths.push(PathBuf::from("/opt/homebrew/bin").join(DEFAULT_PROGRAM));
        } else {
            paths.push(PathBuf::from("/usr/bin").join(DEFAULT_PROGRAM));
        }
    }

    paths
}
