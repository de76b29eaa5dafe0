#![no_main]

use arxiv_search_mcp::models::{GetPaperInput, SearchPapersInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = SearchPapersInput::from_arguments(json.clone());
        let _ = GetPaperInput::from_arguments(json);
    }
});
