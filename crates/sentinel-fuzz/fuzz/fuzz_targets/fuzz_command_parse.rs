#![no_main]

use gref::repl::{Command, State};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = Command::parse(line, State::Idle);
        let _ = Command::parse(line, State::Active);
    }
});
