//! # Game Dataset Analysis Library
//!
//! `gamestats` is a small library for browsing and summarizing a fixed
//! table of video games. It backs two binaries: a desktop GUI for viewing
//! the table, filtering it by genre and year, and rendering charts, and a
//! console tool that prints descriptive statistics.
//!
//! ## Features
//!
//! - Fixed in-memory sample dataset (no external data source)
//! - Genre/year filtering with identity and idempotence guarantees
//! - Overall, per-genre, and per-year summary statistics
//! - Top-N rankings by rating, sales, and hours-per-dollar value
//! - Price/playtime correlation and high-rating listings
//! - Sales bar chart and rating histogram rendered with plotters
//!
//! ## Example
//!
//! ```no_run
//! use eframe::NativeOptions;
//! use gamestats::GameStatsApp;
//!
//! eframe::run_native(
//!     "Game Data Analysis",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(GameStatsApp::default()) as Box<dyn eframe::App>)),
//! )
//! .unwrap();
//! ```

pub mod analysis;
pub mod app;
pub mod data;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as GameStatsApp;
pub use types::{AnalysisError, AnalysisResult, FilterCriteria, GameRecord};
