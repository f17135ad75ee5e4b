//! Render invoker: command assembly, execution and renderer discovery.

mod command;
mod probe;
mod render;

pub use command::RenderCommand;
pub use probe::{candidate_programs, discover, probe};
pub use render::Renderer;
