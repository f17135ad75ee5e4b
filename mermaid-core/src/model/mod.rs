//! Data model types for a single render.

mod format;
mod outcome;
mod request;

pub use format::OutputFormat;
pub use outcome::{Notice, NoticeLevel, RenderOutcome};
pub use request::{RenderRequest, RenderRequestBuilder};
