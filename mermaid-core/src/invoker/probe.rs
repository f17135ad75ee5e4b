//! Renderer availability checks.

use crate::config::{fallback_programs, npm_binary_name, RendererConfig, FLAG_VERSION};
use crate::error::{RenderError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Run `<program> --version` and return the trimmed version text.
pub fn probe(program: &Path) -> Result<String> {
    let output = Command::new(program)
        .arg(FLAG_VERSION)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RenderError::ToolNotFound {
                attempted: vec![program.display().to_string()],
            },
            _ => RenderError::Io(e),
        })?;

    if !output.status.success() {
        return Err(RenderError::ToolFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Directory holding npm's global executables, if npm is installed.
fn npm_global_bin() -> Option<PathBuf> {
    let output = Command::new(npm_binary_name())
        .args(["root", "-g"])
        .stdin(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    let bin = if cfg!(windows) {
        root.parent()?.to_path_buf()
    } else {
        root.parent()?.join("bin")
    };
    bin.is_dir().then_some(bin)
}

/// Every location worth trying, configured program first, without duplicates.
pub fn candidate_programs(config: &RendererConfig) -> Vec<PathBuf> {
    let mut candidates = vec![config.program.clone()];

    if let Some(bin) = npm_global_bin() {
        candidates.push(bin.join("mmdc"));
        if cfg!(windows) {
            candidates.push(bin.join("mmdc.cmd"));
        }
    }
    candidates.extend(fallback_programs());

    let mut seen = std::collections::HashSet::new();
    candidates.retain(|path| seen.insert(path.clone()));
    candidates
}

/// Find the first candidate that answers `--version`.
///
/// Returns the working program and its version string.
pub fn discover(config: &RendererConfig) -> Result<(PathBuf, String)> {
    let candidates = candidate_programs(config);

    for candidate in &candidates {
        debug!("Trying renderer: {}", candidate.display());
        match probe(candidate) {
            Ok(version) => {
                info!("Found renderer at {} ({})", candidate.display(), version);
                return Ok((candidate.clone(), version));
            }
            Err(e) => debug!("{}: {}", candidate.display(), e),
        }
    }

    Err(RenderError::ToolNotFound {
        attempted: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_probe_missing_program() {
        let err = probe(Path::new("mmdc-does-not-exist-8f3a1c")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ToolNotFound);
    }

    #[test]
    fn test_candidates_start_with_configured() {
        let config = RendererConfig::new("/custom/mmdc");
        let candidates = candidate_programs(&config);
        assert_eq!(candidates[0], PathBuf::from("/custom/mmdc"));
        assert!(candidates.len() > 1);
    }

    #[test]
    fn test_candidates_are_unique() {
        let candidates = candidate_programs(&RendererConfig::default());
        let unique: std::collections::HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
    }
}
