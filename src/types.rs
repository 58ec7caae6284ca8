//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing the game dataset, filter criteria, and analysis results.

use thiserror::Error;

/// One game in the dataset.
///
/// Records are immutable after construction; filtering and aggregation
/// produce new sequences or summary structs rather than mutating the table.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Game title, unique within the dataset
    pub title: String,
    /// Genre label (open-ended set of categories)
    pub genre: String,
    /// Year of release
    pub release_year: i32,
    /// Review rating on a 0.0-10.0 scale
    pub rating: f64,
    /// Lifetime sales in millions of units
    pub sales_millions: f64,
    /// Typical playtime in hours
    pub playtime_hours: u32,
    /// Retail price in dollars
    pub price: f64,
}

/// Optional genre/year predicate applied to the table before display or
/// aggregation. `None` in a field means "All" (no constraint), so the
/// default criteria are the identity filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl FilterCriteria {
    /// Whether a record satisfies both constraints.
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.genre.as_deref().map_or(true, |g| g == record.genre)
            && self.year.map_or(true, |y| y == record.release_year)
    }
}

/// Overall statistics for a table.
///
/// Values are kept unrounded; the presentation boundary formats them
/// (`{:.2}` on the console, see [`crate::utils`]).
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStats {
    /// Number of records summarized
    pub total_games: usize,
    /// Arithmetic mean of ratings
    pub avg_rating: f64,
    /// Arithmetic mean of prices
    pub avg_price: f64,
    /// Summed sales in millions of units
    pub total_sales: f64,
    /// Arithmetic mean of playtime hours
    pub avg_playtime: f64,
}

impl BasicStats {
    /// Label/value pairs in display order, for the console report.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("total_games", self.total_games as f64),
            ("avg_rating", self.avg_rating),
            ("avg_price", self.avg_price),
            ("total_sales", self.total_sales),
            ("avg_playtime", self.avg_playtime),
        ]
    }
}

/// Per-genre aggregate, numeric fields rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreSummary {
    pub genre: String,
    pub game_count: usize,
    pub avg_rating: f64,
    pub total_sales_millions: f64,
    pub avg_price: f64,
}

/// Per-release-year aggregate, numeric fields rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub release_year: i32,
    pub games_released: usize,
    pub total_sales_millions: f64,
}

/// One row of the top-rated ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedEntry {
    pub title: String,
    pub rating: f64,
    pub genre: String,
}

/// One row of the top-selling ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SellingEntry {
    pub title: String,
    pub sales_millions: f64,
    pub genre: String,
}

/// One row of the best-value ranking. Records with a zero price never
/// appear here since hours-per-dollar is undefined for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEntry {
    pub title: String,
    pub hours_per_dollar: f64,
    pub price: f64,
}

/// The result of summarizing a game table.
///
/// Contains everything the presentation layer needs: overall statistics,
/// the per-genre and per-year groupings, and the three top-3 rankings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Overall statistics across all summarized records
    pub basic: BasicStats,
    /// Per-genre summaries, ordered by first appearance of the genre
    pub genres: Vec<GenreSummary>,
    /// Per-year summaries, ordered by first appearance of the year
    pub years: Vec<YearSummary>,
    /// Top games by rating (descending, ties keep input order)
    pub top_rated: Vec<RatedEntry>,
    /// Top games by sales (descending, ties keep input order)
    pub top_selling: Vec<SellingEntry>,
    /// Top games by hours-per-dollar (descending, ties keep input order)
    pub best_value: Vec<ValueEntry>,
}

/// Errors produced by the aggregation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Aggregating an empty table; means over zero records are undefined
    /// and must not be reported as a misleading zero.
    #[error("no game data to analyze")]
    EmptyTable,
    /// Correlation over fewer than two records, or over a column with
    /// zero variance.
    #[error("not enough data to compute a correlation")]
    NotEnoughData,
}
