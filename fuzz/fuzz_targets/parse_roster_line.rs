//! Fuzz harness for the roster line parser.
//!
//! A malformed line must yield `None`, never a panic.

#![no_main]

use boxscore_ingest_roster::parse_player_line;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return; // Skip non-UTF-8 input
    };
    let _ = parse_player_line(line);
});
