//! Pipeline orchestration for the boxscore CLI.
//!
//! Wires a roster source into the player directory, writes the report
//! artifacts, and interprets the interactive session commands. This is the
//! coordination layer between the CLI and the library crates.

use anyhow::{Context, Result};
use boxscore_ports::{Renderer, RosterSource};
use boxscore_tree::PlayerDirectory;
use std::path::{Path, PathBuf};

mod config;
mod session;

pub use config::RunConfig;
pub use session::{Command, CommandOutcome, apply_command};

/// Paths written by a run.
#[derive(Debug, Clone)]
pub struct RunOutputs {
    pub report_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

pub struct Engine<'a> {
    pub renderer: &'a dyn Renderer,
}

impl<'a> Engine<'a> {
    pub fn new(renderer: &'a dyn Renderer) -> Self {
        Self { renderer }
    }

    /// Read the roster, build the directory and write the report file,
    /// plus the JSON export when a path is given.
    ///
    /// Returns the populated directory so an interactive session can keep
    /// mutating it after the artifacts are on disk.
    pub fn run(
        &self,
        source: &mut dyn RosterSource,
        report_path: &Path,
        json_path: Option<&Path>,
    ) -> Result<(PlayerDirectory, RunOutputs)> {
        let players = source.read_players()?;
        let directory = PlayerDirectory::from_players(players);

        let report = self.renderer.render_report(&directory)?;
        std::fs::write(report_path, report)
            .with_context(|| format!("write report to {report_path:?}"))?;

        let json_path = match json_path {
            Some(path) => {
                boxscore_export_json::write_roster_json(path, &directory)?;
                Some(path.to_path_buf())
            }
            None => None,
        };

        let outputs = RunOutputs {
            report_path: report_path.to_path_buf(),
            json_path,
        };
        Ok((directory, outputs))
    }
}
