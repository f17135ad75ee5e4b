//! mermaid-core - Core library for rendering Mermaid diagrams with mmdc.
//!
//! Rendering itself is delegated to the Mermaid CLI (`mmdc`). This crate builds
//! the request, assembles the exact command line, pipes the diagram source to
//! the tool and classifies what happened.
//!
//! # Example
//!
//! ```no_run
//! use mermaid_core::{OutputFormat, RenderRequest, Renderer};
//!
//! let request = RenderRequest::builder("graph TD\n A-->B", "diagram")
//!     .format(OutputFormat::Svg)
//!     .output_dir(Some("/tmp"))
//!     .build()
//!     .unwrap();
//! let outcome = Renderer::default().render(request);
//! println!("{}", outcome.notice());
//! ```

pub mod config;
pub mod error;
pub mod invoker;
pub mod model;

// Re-exports for convenience
pub use config::RendererConfig;
pub use error::{ErrorCode, RenderError, Result};
pub use invoker::{discover, probe, RenderCommand, Renderer};
pub use model::{Notice, NoticeLevel, OutputFormat, RenderOutcome, RenderRequest};

/// Build and render in one step.
///
/// Validation failures are returned as `Err` before any process is spawned;
/// everything after that is reported through the [`RenderOutcome`].
pub fn render_diagram(
    renderer: &Renderer,
    builder: model::RenderRequestBuilder,
) -> Result<RenderOutcome> {
    let request = builder.build()?;
    Ok(renderer.render(request))
}
