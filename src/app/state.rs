use egui::TextureHandle;

use crate::analysis::filter;
use crate::data::sample_games;
use crate::types::{FilterCriteria, GameRecord};

/// Which central-panel view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    AllGames,
    GenreAnalysis,
    SalesChart,
    RatingDistribution,
}

impl View {
    fn is_chart(self) -> bool {
        matches!(self, View::SalesChart | View::RatingDistribution)
    }
}

/// Main application state
pub struct App {
    /// The full table; read-only after construction
    pub games: Vec<GameRecord>,
    /// The rows currently shown in the listing (full or filtered)
    pub visible: Vec<GameRecord>,
    /// Genre dropdown selection; "All" means no constraint
    pub genre_filter: String,
    /// Raw year field text; "All" or a year, validated on apply
    pub year_filter: String,
    pub current_view: View,
    pub chart_texture: Option<TextureHandle>,
    /// Set when the active chart needs re-rendering
    pub chart_dirty: bool,
    pub error_message: Option<String>,
}

impl App {
    /// Switch the central panel; chart views mark the texture stale.
    pub fn select_view(&mut self, view: View) {
        self.current_view = view;
        if view.is_chart() {
            self.chart_dirty = true;
        }
    }

    /// Parse the filter widgets into well-typed criteria.
    ///
    /// The genre dropdown only offers valid values; the year field is free
    /// text and is where invalid input gets caught.
    pub fn parse_criteria(&self) -> Result<FilterCriteria, String> {
        let genre = if self.genre_filter == "All" {
            None
        } else {
            Some(self.genre_filter.clone())
        };

        let year_text = self.year_filter.trim();
        let year = if year_text.is_empty() || year_text == "All" {
            None
        } else {
            Some(
                year_text
                    .parse::<i32>()
                    .map_err(|_| format!("\"{}\" is not a valid year", year_text))?,
            )
        };

        Ok(FilterCriteria { genre, year })
    }

    /// Run the filter stage against the current widget state and show the
    /// result in the listing. Invalid year input surfaces as an error
    /// message and leaves the listing untouched.
    pub fn apply_filters(&mut self) {
        match self.parse_criteria() {
            Ok(criteria) => {
                self.visible = filter(&self.games, &criteria);
                self.error_message = None;
                self.current_view = View::AllGames;
            }
            Err(message) => {
                log::warn!("rejected filter input: {}", message);
                self.error_message = Some(message);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        let games = sample_games();
        let visible = games.clone();
        Self {
            games,
            visible,
            genre_filter: "All".to_string(),
            year_filter: "All".to_string(),
            current_view: View::AllGames,
            chart_texture: None,
            chart_dirty: false,
            error_message: None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::draw_ui(self, ctx);
    }
}
