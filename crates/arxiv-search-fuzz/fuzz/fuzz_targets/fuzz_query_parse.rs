#![no_main]

use arxiv_search_mcp::{build_arxiv_query, parse_query};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let intent = parse_query(text);
    let query = build_arxiv_query(&intent);
    assert!(!query.is_empty());
});
