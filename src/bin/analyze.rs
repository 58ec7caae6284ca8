//! Console analysis tool.
//!
//! Runs the aggregation engine over the sample dataset and prints every
//! section to stdout: basic statistics, genre and yearly analysis, the
//! three top-3 rankings, games rated above 9.0, the price/playtime
//! correlation, and average sales per genre.

use anyhow::Result;

use gamestats::analysis::{
    avg_sales_by_genre, price_playtime_correlation, rated_above, summarize,
};
use gamestats::data::sample_games;
use gamestats::types::AnalysisResult;
use gamestats::utils::{format_price, format_rating, format_sales, stat_label};

fn main() -> Result<()> {
    env_logger::init();

    let games = sample_games();
    let results = summarize(&games)?;
    print_analysis(&results);

    println!("\nGames rated above 9.0:");
    for game in rated_above(&games, 9.0) {
        println!("{}: {}", game.title, format_rating(game.rating));
    }

    let correlation = price_playtime_correlation(&games)?;
    println!("\nCorrelation between price and playtime: {:.2}", correlation);

    println!("\nAverage sales by genre:");
    for (genre, avg) in avg_sales_by_genre(&games) {
        println!("{}: {}", genre, format_sales(avg));
    }

    Ok(())
}

fn print_analysis(results: &AnalysisResult) {
    println!("\n=== GAME ANALYSIS RESULTS ===\n");

    println!("Basic Statistics:");
    for (key, value) in results.basic.entries() {
        println!("{}: {:.2}", stat_label(key), value);
    }

    println!("\nGenre Analysis:");
    for genre in &results.genres {
        println!(
            "{}: {} games, avg rating {:.2}, total sales {}, avg price {}",
            genre.genre,
            genre.game_count,
            genre.avg_rating,
            format_sales(genre.total_sales_millions),
            format_price(genre.avg_price),
        );
    }

    println!("\nYearly Analysis:");
    for year in &results.years {
        println!(
            "{}: {} released, total sales {}",
            year.release_year,
            year.games_released,
            format_sales(year.total_sales_millions),
        );
    }

    println!("\nTop Rated Games:");
    for entry in &results.top_rated {
        println!(
            "{} ({}): {}",
            entry.title,
            entry.genre,
            format_rating(entry.rating)
        );
    }

    println!("\nTop Selling Games:");
    for entry in &results.top_selling {
        println!(
            "{} ({}): {}",
            entry.title,
            entry.genre,
            format_sales(entry.sales_millions)
        );
    }

    println!("\nBest Value Games:");
    for entry in &results.best_value {
        println!(
            "{} ({}): {:.2} hours per dollar",
            entry.title,
            format_price(entry.price),
            entry.hours_per_dollar
        );
    }
}
