//! Dataset provider: the fixed sample table the whole application runs on.
//!
//! There is no external data source; both binaries and the GUI operate on
//! this hardcoded list. The table is built once per process and cloned out
//! to callers, which keeps every downstream operation free to take ownership
//! without touching shared state.

use once_cell::sync::Lazy;

use crate::types::GameRecord;

static SAMPLE_GAMES: Lazy<Vec<GameRecord>> = Lazy::new(|| {
    vec![
        game("The Witcher 3", "RPG", 2015, 9.8, 40.2, 100, 39.99),
        game("Red Dead Redemption 2", "Action-Adventure", 2018, 9.7, 50.5, 80, 59.99),
        game("God of War", "Action", 2018, 9.5, 23.0, 30, 49.99),
        game("Cyberpunk 2077", "RPG", 2020, 7.8, 18.2, 60, 59.99),
        game("GTA V", "Action-Adventure", 2013, 9.6, 170.0, 50, 29.99),
        game("Elden Ring", "RPG", 2022, 9.4, 20.5, 70, 59.99),
        game("Horizon Zero Dawn", "Action-RPG", 2017, 9.2, 20.0, 40, 49.99),
        game("Spider-Man", "Action-Adventure", 2018, 9.3, 33.2, 25, 39.99),
    ]
});

fn game(
    title: &str,
    genre: &str,
    release_year: i32,
    rating: f64,
    sales_millions: f64,
    playtime_hours: u32,
    price: f64,
) -> GameRecord {
    GameRecord {
        title: title.to_string(),
        genre: genre.to_string(),
        release_year,
        rating,
        sales_millions,
        playtime_hours,
        price,
    }
}

/// The sample table, in display order.
pub fn sample_games() -> Vec<GameRecord> {
    SAMPLE_GAMES.clone()
}
