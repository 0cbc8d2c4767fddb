//! JSON roster export artifact.
//!
//! The text report is for humans; this envelope is the machine-readable
//! companion written next to it.

use anyhow::{Context, Result};
use boxscore_schema::Player;
use boxscore_tree::PlayerDirectory;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Canonical export filename when the caller only picks a directory.
pub const FILE_ROSTER_JSON: &str = "roster.json";

/// Envelope written by [`write_roster_json`].
///
/// Players appear in ascending sort-key order. Non-finite derived
/// statistics serialize as JSON `null` (serde_json behavior for NaN/inf).
#[derive(Debug, Serialize)]
pub struct RosterExport<'a> {
    pub generated_at: DateTime<Utc>,
    pub player_count: usize,
    pub overall_batting_average: f64,
    pub players: Vec<&'a Player>,
}

impl<'a> RosterExport<'a> {
    /// Snapshot the directory.
    pub fn from_directory(directory: &'a PlayerDirectory) -> Self {
        Self {
            generated_at: Utc::now(),
            player_count: directory.len(),
            overall_batting_average: directory.overall_batting_average(),
            players: directory.players().collect(),
        }
    }
}

/// Serialize the export envelope as pretty JSON at `path`.
pub fn write_roster_json(path: &Path, directory: &PlayerDirectory) -> Result<()> {
    let export = RosterExport::from_directory(directory);
    let json = serde_json::to_string_pretty(&export).context("serialize roster export")?;
    std::fs::write(path, json).with_context(|| format!("write roster export to {path:?}"))?;
    Ok(())
}
