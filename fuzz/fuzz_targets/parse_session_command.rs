//! Fuzz harness for interactive session command parsing.

#![no_main]

use boxscore_engine::Command;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return; // Skip non-UTF-8 input
    };
    let _ = Command::parse(line);
});
