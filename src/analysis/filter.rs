//! Filter stage: applies optional genre/year criteria ahead of display
//! or aggregation.

use crate::types::{FilterCriteria, GameRecord};

/// Return the records satisfying `criteria`, preserving input order.
///
/// Empty criteria (both fields `None`) are the identity transform. The
/// input table is never mutated; callers get a fresh sequence. Criteria
/// are assumed well-typed — parsing a year out of user input is the
/// presentation layer's job.
pub fn filter(games: &[GameRecord], criteria: &FilterCriteria) -> Vec<GameRecord> {
    games
        .iter()
        .filter(|g| criteria.matches(g))
        .cloned()
        .collect()
}
