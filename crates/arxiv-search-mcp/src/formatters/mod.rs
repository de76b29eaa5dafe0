//! Output formatters for Markdown and JSON.

mod json;
mod markdown;

pub use json::*;
pub use markdown::*;
