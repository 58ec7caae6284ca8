//! Aggregation engine: pure summary computations over a game table.
//!
//! Everything in here is a function of its input slice; nothing is cached
//! or mutated. Grouping is done explicitly (key to record indices, ordered
//! by first appearance in the input) so the summary order is deterministic
//! for a given table. Rankings use Rust's stable sort, so records tied on
//! a metric keep their input order.

use std::cmp::Ordering;

use statrs::statistics::Statistics;

use crate::types::{
    AnalysisError, AnalysisResult, BasicStats, GameRecord, GenreSummary, RatedEntry,
    SellingEntry, ValueEntry, YearSummary,
};

/// Ranking depth used by [`summarize`]; the individual ranking functions
/// take an explicit `n`.
pub const DEFAULT_TOP_N: usize = 3;

/// Summarize a table: overall statistics, per-genre and per-year
/// aggregates, and the three top-3 rankings.
///
/// Fails with [`AnalysisError::EmptyTable`] on an empty table, since a
/// mean over zero records has no meaningful value to report.
pub fn summarize(games: &[GameRecord]) -> Result<AnalysisResult, AnalysisError> {
    if games.is_empty() {
        return Err(AnalysisError::EmptyTable);
    }

    let ratings: Vec<f64> = games.iter().map(|g| g.rating).collect();
    let prices: Vec<f64> = games.iter().map(|g| g.price).collect();
    let playtimes: Vec<f64> = games.iter().map(|g| f64::from(g.playtime_hours)).collect();

    let basic = BasicStats {
        total_games: games.len(),
        avg_rating: ratings.iter().mean(),
        avg_price: prices.iter().mean(),
        total_sales: games.iter().map(|g| g.sales_millions).sum(),
        avg_playtime: playtimes.iter().mean(),
    };

    Ok(AnalysisResult {
        basic,
        genres: genre_summaries(games),
        years: year_summaries(games),
        top_rated: top_rated(games, DEFAULT_TOP_N),
        top_selling: top_selling(games, DEFAULT_TOP_N),
        best_value: best_value(games, DEFAULT_TOP_N),
    })
}

/// Per-genre aggregates in first-appearance order, rounded to 2 decimals.
pub fn genre_summaries(games: &[GameRecord]) -> Vec<GenreSummary> {
    group_indices(games, |g| g.genre.clone())
        .into_iter()
        .map(|(genre, idxs)| {
            let ratings: Vec<f64> = idxs.iter().map(|&i| games[i].rating).collect();
            let prices: Vec<f64> = idxs.iter().map(|&i| games[i].price).collect();
            let sales: f64 = idxs.iter().map(|&i| games[i].sales_millions).sum();
            GenreSummary {
                genre,
                game_count: idxs.len(),
                avg_rating: round2(ratings.iter().mean()),
                total_sales_millions: round2(sales),
                avg_price: round2(prices.iter().mean()),
            }
        })
        .collect()
}

/// Per-year aggregates in first-appearance order, rounded to 2 decimals.
pub fn year_summaries(games: &[GameRecord]) -> Vec<YearSummary> {
    group_indices(games, |g| g.release_year)
        .into_iter()
        .map(|(release_year, idxs)| {
            let sales: f64 = idxs.iter().map(|&i| games[i].sales_millions).sum();
            YearSummary {
                release_year,
                games_released: idxs.len(),
                total_sales_millions: round2(sales),
            }
        })
        .collect()
}

/// Top `n` games by rating, descending; ties keep input order.
pub fn top_rated(games: &[GameRecord], n: usize) -> Vec<RatedEntry> {
    rank_by(games, n, |g| g.rating)
        .into_iter()
        .map(|g| RatedEntry {
            title: g.title.clone(),
            rating: g.rating,
            genre: g.genre.clone(),
        })
        .collect()
}

/// Top `n` games by sales, descending; ties keep input order.
pub fn top_selling(games: &[GameRecord], n: usize) -> Vec<SellingEntry> {
    rank_by(games, n, |g| g.sales_millions)
        .into_iter()
        .map(|g| SellingEntry {
            title: g.title.clone(),
            sales_millions: g.sales_millions,
            genre: g.genre.clone(),
        })
        .collect()
}

/// Top `n` games by hours of playtime per dollar, descending; ties keep
/// input order. Records priced at zero are excluded up front — the metric
/// is undefined for them.
pub fn best_value(games: &[GameRecord], n: usize) -> Vec<ValueEntry> {
    let priced: Vec<GameRecord> = games.iter().filter(|g| g.price > 0.0).cloned().collect();
    rank_by(&priced, n, hours_per_dollar)
        .into_iter()
        .map(|g| ValueEntry {
            title: g.title.clone(),
            hours_per_dollar: hours_per_dollar(g),
            price: g.price,
        })
        .collect()
}

/// Records rated strictly above `threshold`, in input order.
pub fn rated_above(games: &[GameRecord], threshold: f64) -> Vec<GameRecord> {
    games
        .iter()
        .filter(|g| g.rating > threshold)
        .cloned()
        .collect()
}

/// Sample Pearson correlation between price and playtime.
///
/// Needs at least two records and non-zero variance in both columns;
/// otherwise the quotient is undefined and [`AnalysisError::NotEnoughData`]
/// is returned.
pub fn price_playtime_correlation(games: &[GameRecord]) -> Result<f64, AnalysisError> {
    if games.len() < 2 {
        return Err(AnalysisError::NotEnoughData);
    }
    let prices: Vec<f64> = games.iter().map(|g| g.price).collect();
    let hours: Vec<f64> = games.iter().map(|g| f64::from(g.playtime_hours)).collect();
    let denom = prices.iter().std_dev() * hours.iter().std_dev();
    if denom == 0.0 {
        return Err(AnalysisError::NotEnoughData);
    }
    Ok(prices.iter().covariance(hours.iter()) / denom)
}

/// Mean sales per genre, in first-appearance order.
pub fn avg_sales_by_genre(games: &[GameRecord]) -> Vec<(String, f64)> {
    group_indices(games, |g| g.genre.clone())
        .into_iter()
        .map(|(genre, idxs)| {
            let sales: Vec<f64> = idxs.iter().map(|&i| games[i].sales_millions).collect();
            (genre, sales.iter().mean())
        })
        .collect()
}

/// Distinct genres in first-appearance order, for the filter dropdown.
pub fn unique_genres(games: &[GameRecord]) -> Vec<String> {
    group_indices(games, |g| g.genre.clone())
        .into_iter()
        .map(|(genre, _)| genre)
        .collect()
}

/// Distinct release years, ascending, for the filter dropdown.
pub fn unique_years(games: &[GameRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = games.iter().map(|g| g.release_year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

fn hours_per_dollar(g: &GameRecord) -> f64 {
    f64::from(g.playtime_hours) / g.price
}

/// Group record indices by a key, preserving the order in which each key
/// first appears in the input. A linear key scan is plenty for a table
/// this size and keeps the ordering guarantee obvious.
fn group_indices<K, F>(games: &[GameRecord], key: F) -> Vec<(K, Vec<usize>)>
where
    K: PartialEq,
    F: Fn(&GameRecord) -> K,
{
    let mut groups: Vec<(K, Vec<usize>)> = Vec::new();
    for (i, game) in games.iter().enumerate() {
        let k = key(game);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, indices)) => indices.push(i),
            None => groups.push((k, vec![i])),
        }
    }
    groups
}

/// Stable descending sort by `metric`, truncated to `n` references.
fn rank_by<F>(games: &[GameRecord], n: usize, metric: F) -> Vec<&GameRecord>
where
    F: Fn(&GameRecord) -> f64,
{
    let mut ranked: Vec<&GameRecord> = games.iter().collect();
    ranked.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_games;
    use pretty_assertions::assert_eq;

    fn record(title: &str, rating: f64, playtime: u32, price: f64) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            genre: "Test".to_string(),
            release_year: 2020,
            rating,
            sales_millions: 1.0,
            playtime_hours: playtime,
            price,
        }
    }

    #[test]
    fn test_summarize_basic_stats() {
        let result = summarize(&sample_games()).unwrap();
        assert_eq!(result.basic.total_games, 8);
        assert!((result.basic.avg_rating - 9.2875).abs() < 1e-9);
        assert!((result.basic.total_sales - 375.6).abs() < 1e-9);
        assert!((result.basic.avg_playtime - 56.875).abs() < 1e-9);
        assert!((result.basic.avg_price - 48.74).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty_table() {
        assert_eq!(summarize(&[]), Err(AnalysisError::EmptyTable));
    }

    #[test]
    fn test_genre_summaries_first_appearance_order() {
        let genres = genre_summaries(&sample_games());
        let names: Vec<&str> = genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(names, vec!["RPG", "Action-Adventure", "Action", "Action-RPG"]);
    }

    #[test]
    fn test_genre_summary_values() {
        let genres = genre_summaries(&sample_games());
        let rpg = &genres[0];
        assert_eq!(rpg.game_count, 3);
        assert_eq!(rpg.avg_rating, 9.0);
        assert_eq!(rpg.total_sales_millions, 78.9);
        assert_eq!(rpg.avg_price, 53.32);

        let adventure = &genres[1];
        assert_eq!(adventure.game_count, 3);
        assert_eq!(adventure.avg_rating, 9.53);
        assert_eq!(adventure.total_sales_millions, 253.7);
        assert_eq!(adventure.avg_price, 43.32);
    }

    #[test]
    fn test_genre_counts_cover_table() {
        let games = sample_games();
        let total: usize = genre_summaries(&games).iter().map(|g| g.game_count).sum();
        assert_eq!(total, games.len());
    }

    #[test]
    fn test_year_summary_values() {
        let years = year_summaries(&sample_games());
        let y2018 = years.iter().find(|y| y.release_year == 2018).unwrap();
        assert_eq!(y2018.games_released, 3);
        assert_eq!(y2018.total_sales_millions, 106.7);
        let y2013 = years.iter().find(|y| y.release_year == 2013).unwrap();
        assert_eq!(y2013.games_released, 1);
        assert_eq!(y2013.total_sales_millions, 170.0);
    }

    #[test]
    fn test_top_rated_order() {
        let top = top_rated(&sample_games(), 3);
        let titles: Vec<&str> = top.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["The Witcher 3", "Red Dead Redemption 2", "GTA V"]
        );
        assert!(top.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_top_selling_order() {
        let top = top_selling(&sample_games(), 3);
        let expected = vec![
            ("GTA V", 170.0),
            ("Red Dead Redemption 2", 50.5),
            ("The Witcher 3", 40.2),
        ];
        let actual: Vec<(&str, f64)> = top
            .iter()
            .map(|e| (e.title.as_str(), e.sales_millions))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_best_value_order() {
        let top = best_value(&sample_games(), 3);
        let titles: Vec<&str> = top.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["The Witcher 3", "GTA V", "Red Dead Redemption 2"]);
        assert!((top[0].hours_per_dollar - 100.0 / 39.99).abs() < 1e-9);
    }

    #[test]
    fn test_top_n_parameterization() {
        let games = sample_games();
        assert!(top_rated(&games, 0).is_empty());
        assert_eq!(top_rated(&games, 1).len(), 1);
        // n beyond the table size returns the whole table, ranked
        assert_eq!(top_rated(&games, 50).len(), games.len());
        assert_eq!(top_selling(&games, 50).len(), games.len());
    }

    #[test]
    fn test_rating_ties_keep_input_order() {
        let games = vec![
            record("first", 9.0, 10, 10.0),
            record("second", 9.0, 10, 10.0),
            record("third", 8.0, 10, 10.0),
        ];
        let top = top_rated(&games, 3);
        let titles: Vec<&str> = top.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_best_value_excludes_zero_price() {
        let games = vec![
            record("freebie", 9.0, 500, 0.0),
            record("paid", 8.0, 50, 25.0),
        ];
        let top = best_value(&games, 3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].title, "paid");
    }

    #[test]
    fn test_rated_above_threshold() {
        let high = rated_above(&sample_games(), 9.0);
        assert_eq!(high.len(), 7);
        assert!(high.iter().all(|g| g.rating > 9.0));
        assert!(!high.iter().any(|g| g.title == "Cyberpunk 2077"));
    }

    #[test]
    fn test_price_playtime_correlation() {
        let r = price_playtime_correlation(&sample_games()).unwrap();
        assert!((r - 0.206).abs() < 0.01, "unexpected correlation {r}");
    }

    #[test]
    fn test_correlation_needs_two_records() {
        assert_eq!(
            price_playtime_correlation(&[]),
            Err(AnalysisError::NotEnoughData)
        );
        let one = vec![record("only", 9.0, 10, 10.0)];
        assert_eq!(
            price_playtime_correlation(&one),
            Err(AnalysisError::NotEnoughData)
        );
    }

    #[test]
    fn test_correlation_zero_variance() {
        let flat = vec![
            record("a", 9.0, 10, 10.0),
            record("b", 8.0, 20, 10.0),
        ];
        assert_eq!(
            price_playtime_correlation(&flat),
            Err(AnalysisError::NotEnoughData)
        );
    }

    #[test]
    fn test_avg_sales_by_genre() {
        let avgs = avg_sales_by_genre(&sample_games());
        let (genre, value) = &avgs[0];
        assert_eq!(genre, "RPG");
        assert!((value - 78.9 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unique_genres_and_years() {
        let games = sample_games();
        assert_eq!(
            unique_genres(&games),
            vec!["RPG", "Action-Adventure", "Action", "Action-RPG"]
        );
        assert_eq!(unique_years(&games), vec![2013, 2015, 2017, 2018, 2020, 2022]);
    }
}
