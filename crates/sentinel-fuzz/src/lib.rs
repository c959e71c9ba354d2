//! Fuzzing library for gref.
//!
//! Targets cover the command parser and JSON deserialization of both the
//! API models and stored collections.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_command_parse -- -max_total_time=60
//! ```

pub use gref::models;
pub use gref::repl::{Command, State};
