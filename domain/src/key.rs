//! Lookup key derivation. Pure string functions; no error conditions.

use crate::CoachKey;

/// Lowercase, drop every space character, then trim surrounding whitespace.
pub fn normalize_team(team: &str) -> String {
    team.to_lowercase().replace(' ', "").trim().to_string()
}

/// Lowercase and trim, remove every literal `coach`, then trim again.
pub fn normalize_position(position: &str) -> String {
    let lowered = position.to_lowercase();
    lowered.trim().replace("coach", "").trim().to_string()
}

pub fn normalize_year(year: &str) -> String {
    year.trim().to_string()
}

impl CoachKey {
    /// Derive the key from raw team, position and year strings.
    ///
    /// Partition is `"{team}#{position}"`, sort is the trimmed year. Blank
    /// input still yields a (degenerate) key such as `"#"` / `""`.
    pub fn from_parts(team: &str, position: &str, year: &str) -> Self {
        let partition = format!("{}#{}", normalize_team(team), normalize_position(position));
        CoachKey::new(partition, normalize_year(year))
    }
}
