use serde::{Deserialize, Serialize};

/// The eight raw counters recorded for each player, in roster column order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingStats {
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
}

impl CountingStats {
    /// Total hits: singles, doubles, triples and home runs.
    pub fn hits(&self) -> u32 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    /// Bases-weighted hit total used by slugging.
    pub fn total_bases(&self) -> u32 {
        self.singles + 2 * self.doubles + 3 * self.triples + 4 * self.home_runs
    }
}

/// Statistics computed once from [`CountingStats`].
///
/// Values are never recomputed lazily; anything that changes the counting
/// stats must rebuild these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging: f64,
    pub on_base_plus_slugging: f64,
}

impl DerivedStats {
    /// Compute the four derived statistics.
    ///
    /// Division by zero is intentionally unguarded: a player with zero
    /// at-bats or plate appearances gets non-finite values, matching the
    /// historical report output for such rows.
    pub fn from_counting(counting: &CountingStats) -> Self {
        let hits = f64::from(counting.hits());
        let at_bats = f64::from(counting.at_bats);

        let batting_average = hits / at_bats;
        let on_base_percentage = (hits + f64::from(counting.walks + counting.hit_by_pitch))
            / f64::from(counting.plate_appearances);
        let slugging = f64::from(counting.total_bases()) / at_bats;

        Self {
            batting_average,
            on_base_percentage,
            slugging,
            on_base_plus_slugging: on_base_percentage + slugging,
        }
    }
}
