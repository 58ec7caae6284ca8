pub mod filter;
pub mod stats;

pub use filter::filter;
pub use stats::{
    avg_sales_by_genre, best_value, price_playtime_correlation, rated_above, summarize,
    top_rated, top_selling, unique_genres, unique_years,
};
