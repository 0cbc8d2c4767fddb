//! Roster text ingestion.
//!
//! One player per line: `first last pa ab 1b 2b 3b hr bb hbp`, whitespace
//! separated. The first line that does not parse as a player ends the
//! stream, mirroring how the historical reader treated a blank line as the
//! end of the roster rather than an error.

use anyhow::{Context, Result};
use boxscore_ports::RosterSource;
use boxscore_schema::{CountingStats, Player};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Counting-stat columns following the two name columns.
const STAT_COLUMNS: usize = 8;

/// Parse one roster line.
///
/// Returns `None` for an empty or malformed line: exactly two name tokens
/// followed by exactly eight unsigned integer tokens are required. Callers
/// treat `None` as end-of-input, never as an error.
pub fn parse_player_line(line: &str) -> Option<Player> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 + STAT_COLUMNS {
        return None;
    }

    let mut columns = [0u32; STAT_COLUMNS];
    for (slot, token) in columns.iter_mut().zip(&tokens[2..]) {
        *slot = token.parse().ok()?;
    }

    let counting = CountingStats {
        plate_appearances: columns[0],
        at_bats: columns[1],
        singles: columns[2],
        doubles: columns[3],
        triples: columns[4],
        home_runs: columns[5],
        walks: columns[6],
        hit_by_pitch: columns[7],
    };
    Some(Player::new(tokens[0], tokens[1], counting))
}

/// Read players until the first non-player line.
///
/// I/O failures are errors; bad records are not.
pub fn read_roster(reader: impl BufRead) -> Result<Vec<Player>> {
    let mut players = Vec::new();
    for line in reader.lines() {
        let line = line.context("read roster line")?;
        match parse_player_line(&line) {
            Some(player) => players.push(player),
            None => break,
        }
    }
    Ok(players)
}

/// Roster source backed by a file on disk.
pub struct RosterFile {
    pub path: PathBuf,
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for RosterFile {
    fn read_players(&mut self) -> Result<Vec<Player>> {
        let file = File::open(&self.path)
            .with_context(|| format!("open roster file {:?}", self.path))?;
        read_roster(BufReader::new(file))
    }
}
