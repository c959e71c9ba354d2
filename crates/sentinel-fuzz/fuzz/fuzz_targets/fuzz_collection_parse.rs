#![no_main]

use gref::actions::{CitationGraph, csv_table};
use gref::models::Collection;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Hand-edited collection files end up here; projecting them must not panic.
    if let Ok(collection) = serde_json::from_slice::<Collection>(data) {
        let _ = CitationGraph::build(&collection).to_dot();
        let _ = csv_table(&collection);
    }
});
