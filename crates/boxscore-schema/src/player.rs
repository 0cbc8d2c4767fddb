use crate::stats::{CountingStats, DerivedStats};
use serde::Serialize;

/// Lowercased `last + first` concatenation, the sole ordering key for the
/// player directory. Case-insensitive on purpose: `remove babe ruth` and
/// `remove Babe Ruth` address the same record.
pub fn build_sort_key(first: &str, last: &str) -> String {
    let mut key = String::with_capacity(first.len() + last.len());
    key.push_str(last);
    key.push_str(first);
    key.to_lowercase()
}

/// One roster entry together with its derived statistics.
///
/// Fields are private so the derived stats and the cached sort key can never
/// drift from the counting stats and names; `Deserialize` is omitted for the
/// same reason. Construction goes through [`Player::new`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Player {
    first_name: String,
    last_name: String,
    sort_key: String,
    counting: CountingStats,
    derived: DerivedStats,
}

impl Player {
    /// Build a player, computing the derived stats and sort key up front.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        counting: CountingStats,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let sort_key = build_sort_key(&first_name, &last_name);
        let derived = DerivedStats::from_counting(&counting);
        Self {
            first_name,
            last_name,
            sort_key,
            counting,
            derived,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"Last, First"`, the label used by reports and tree dumps.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// The cached ordering key. Two players order equal iff these are equal.
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn counting(&self) -> &CountingStats {
        &self.counting
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn batting_average(&self) -> f64 {
        self.derived.batting_average
    }

    pub fn on_base_plus_slugging(&self) -> f64 {
        self.derived.on_base_plus_slugging
    }

    /// Rename the player. The sort key is recomputed; the stats stand.
    pub fn set_names(&mut self, first: impl Into<String>, last: impl Into<String>) {
        self.first_name = first.into();
        self.last_name = last.into();
        self.sort_key = build_sort_key(&self.first_name, &self.last_name);
    }
}
