//! Sentences returned to the agent.

use crate::validate::CoachQuery;
use crate::CoachRecord;

/// Fallback name when a record carries no `Coach` attribute.
pub const UNKNOWN_COACH: &str = "Unknown";

/// Render the reply for a query. `None` covers both a miss and a collapsed
/// store fault. Original query strings are used, not the normalized key.
pub fn render(query: &CoachQuery, record: Option<&CoachRecord>) -> String {
    match record {
        Some(rec) => format!(
            "The {} {} coach in the {} Season was {}",
            query.team,
            query.position,
            query.year,
            rec.coach.as_deref().unwrap_or(UNKNOWN_COACH)
        ),
        None => format!(
            "No coach data found for {} {} in {}",
            query.team, query.position, query.year
        ),
    }
}
