#![no_main]

use arxiv_search_mcp::feed::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any body, valid feed or not, must come back as Ok or Err
    if let Ok(body) = std::str::from_utf8(data) {
        let _ = normalize(body);
    }
});
