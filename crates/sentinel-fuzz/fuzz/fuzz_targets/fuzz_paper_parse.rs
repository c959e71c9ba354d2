#![no_main]

use gref::models::{Article, Paper};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    if let Ok(paper) = serde_json::from_slice::<Paper>(data) {
        let _ = Article::from_paper(paper, Vec::new());
    }
});
