//! Synchronous renderer invocation and outcome classification.

use crate::config::RendererConfig;
use crate::model::{RenderOutcome, RenderRequest};
use std::io::{self, Write};
use std::process::Child;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::RenderCommand;

/// The render invoker.
///
/// Holds no per-call state: every [`Renderer::render`] spawns one child
/// process and blocks until it exits. Overlapping calls are not serialized.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Assemble the command for `request` without running it.
    pub fn command(&self, request: &RenderRequest) -> RenderCommand {
        RenderCommand::new(&self.config.program, request)
    }

    /// Run the renderer for `request` and classify the result.
    pub fn render(&self, request: RenderRequest) -> RenderOutcome {
        let command = self.command(&request);
        let command_line = command.command_line();
        let output_path = request.output_path();

        info!("Rendering {} diagram to {}", request.format(), output_path.display());
        debug!("Command: {}", command_line);
        debug!("Source length: {}", request.source().len());

        let start = Instant::now();
        let child = match command.to_command().spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Renderer not found: {}", command.program().display());
                return RenderOutcome::ToolNotFound;
            }
            Err(e) => {
                return RenderOutcome::UnexpectedError {
                    message: format!("Failed to start renderer: {}", e),
                };
            }
        };

        let (output, write_result) = match feed_and_wait(child, request.source()) {
            Ok(result) => result,
            Err(e) => {
                return RenderOutcome::UnexpectedError {
                    message: format!("Command execution error: {}", e),
                };
            }
        };
        debug!("Renderer finished in {} ms", start.elapsed().as_millis());

        if !output.status.success() {
            return RenderOutcome::ToolError {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                command_line,
            };
        }

        if let Err(e) = write_result {
            return RenderOutcome::UnexpectedError {
                message: format!("Failed to write to stdin: {}", e),
            };
        }

        if !output_path.exists() {
            warn!(
                "Renderer succeeded but {} does not exist",
                output_path.display()
            );
        }

        RenderOutcome::Success {
            output_path,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        }
    }
}

/// Write `source` to the child's stdin on a helper thread, close it, then
/// collect stdout/stderr and the exit status.
///
/// The inner result is the stdin write result; it is only meaningful when the
/// process exited successfully.
fn feed_and_wait(
    mut child: Child,
    source: &str,
) -> io::Result<(std::process::Output, io::Result<()>)> {
    let stdin = child.stdin.take();

    std::thread::scope(|scope| -> io::Result<_> {
        let writer = scope.spawn(move || -> io::Result<()> {
            match stdin {
                Some(mut stdin) => {
                    stdin.write_all(source.as_bytes())?;
                    stdin.flush()
                }
                None => Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "renderer stdin was not captured",
                )),
            }
        });

        let output = child.wait_with_output()?;
        let write_result = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));

        Ok((output, write_result))
    })
}
