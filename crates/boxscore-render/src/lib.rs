//! Fixed-width text report renderers for the player directory.
//!
//! Converts the ordered directory into the team report consumed by
//! downstream diffs: header with player count and overall batting average,
//! a column header, the ascending listing, then a descending listing under
//! its own header. Widths and header strings are constants because the
//! format is column-for-column stable.

use anyhow::Result;
use boxscore_ports::Renderer;
use boxscore_schema::Player;
use boxscore_tree::PlayerDirectory;

/// Column header shared by the ascending and descending listings.
pub const COLUMN_HEADER: &str = "    PLAYER NAME      :    AVERAGE    OPS";
/// Rule printed under the column header.
pub const RULE: &str = "---------------------------------------------";
/// Header over the descending listing.
pub const REVERSE_HEADER: &str = "For testing, list in reverse order is:";

/// One fixed-width report row: `"Last, First"` right-justified in 20
/// columns, then batting average and OPS right-justified in 9 columns each
/// at 3 decimals. Names longer than the column are not truncated.
///
/// Non-finite statistics (a zero-at-bat player) format as `NaN`/`inf`
/// rather than failing; the row stays well-formed.
pub fn render_row(player: &Player) -> String {
    format!(
        "{:>20} : {:>9.3}{:>9.3}",
        player.display_name(),
        player.batting_average(),
        player.on_base_plus_slugging(),
    )
}

/// Alphabetical listing, one row per player with a trailing newline each.
///
/// An empty directory renders as a single blank line, which keeps the
/// report body non-empty and the section layout stable.
pub fn render_listing(directory: &PlayerDirectory, reverse: bool) -> String {
    if directory.is_empty() {
        return "\n".to_string();
    }
    let rows: Box<dyn Iterator<Item = &Player> + '_> = if reverse {
        Box::new(directory.players_rev())
    } else {
        Box::new(directory.players())
    };
    let mut out = String::new();
    for player in rows {
        out.push_str(&render_row(player));
        out.push('\n');
    }
    out
}

/// The full team report.
pub fn render_report(directory: &PlayerDirectory) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "BASEBALL TEAM REPORT --- {} PLAYERS FOUND IN FILE\n",
        directory.len()
    ));
    out.push_str(&format!(
        "OVERALL BATTING AVERAGE is {:.3}\n",
        directory.overall_batting_average()
    ));
    out.push_str(COLUMN_HEADER);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&render_listing(directory, false));
    out.push('\n');
    out.push_str(REVERSE_HEADER);
    out.push('\n');
    out.push_str(COLUMN_HEADER);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&render_listing(directory, true));
    out
}

/// Structural dump used by the interactive `print` command: one node per
/// line in pre-order (self, left, right), `|-` prefix, two spaces of
/// indent per depth level.
pub fn render_tree_shape(directory: &PlayerDirectory) -> String {
    let mut out = String::new();
    directory.visit_shape(|depth, player| {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str("|-");
        out.push_str(&player.display_name());
        out.push('\n');
    });
    out
}

/// The fixed-format renderer wired into the CLI.
pub struct TextReportRenderer;

impl Renderer for TextReportRenderer {
    fn render_report(&self, directory: &PlayerDirectory) -> Result<String> {
        Ok(render_report(directory))
    }
}
