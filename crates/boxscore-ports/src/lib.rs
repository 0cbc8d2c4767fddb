//! Trait seams between the boxscore pipeline stages.

use anyhow::Result;
use boxscore_schema::Player;
use boxscore_tree::PlayerDirectory;

/// A source of parsed roster records.
///
/// Adapters live in `boxscore-ingest-*` crates. A source yields only
/// complete records: malformed or missing input ends the stream instead of
/// producing an error.
pub trait RosterSource {
    fn read_players(&mut self) -> Result<Vec<Player>>;
}

/// Report rendering.
///
/// Renderers should be pure: directory in, text out.
pub trait Renderer {
    fn render_report(&self, directory: &PlayerDirectory) -> Result<String>;
}
