//! Fuzzing library for arxiv-search-mcp.
//!
//! Targets cover the two untrusted inputs: catalog response bodies and
//! free-text queries, plus raw tool arguments.
//!
//! # Usage
//!
//! ```bash
//! cd crates/arxiv-search-fuzz
//! cargo +nightly fuzz run fuzz_feed_parse -- -max_total_time=60
//! ```

pub use arxiv_search_mcp::{build_arxiv_query, feed, models, normalize, parse_query};
