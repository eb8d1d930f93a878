//! Agent-callable tools over the kanji and WaniKani clients.
//!
//! Each tool normalizes its arguments, calls one source operation and returns
//! the record as JSON text. Bad arguments raise [`ToolError::Retryable`]
//! before any request; a source that yields nothing raises
//! [`ToolError::Execution`]. The profile tool is the exception: it always
//! returns a string.

pub mod catalog;
pub mod context;
pub mod error;
mod input;
pub mod kanji;
pub mod wanikani;

pub use catalog::{ToolCatalog, ToolDefinition, definitions};
pub use context::{ToolContext, WANIKANI_API_TOKEN};
pub use error::ToolError;
pub use kanji::KanjiTools;
pub use wanikani::ProfileTools;

#[cfg(test)]
mod tests;
