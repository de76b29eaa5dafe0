//! Data models for the query pipeline and arXiv catalog entities.
//!
//! Every value here is built fresh per request and never mutated afterwards.

mod enums;
mod inputs;
mod intent;
mod paper;

pub use enums::{ResponseFormat, SortBy, SortOrder};
pub use inputs::{GetPaperInput, SearchPapersInput};
pub use intent::{DateRange, SearchIntent};
pub use paper::{Paper, SearchParams, SearchResponse};
