mod format;

pub use format::{format_playtime, format_price, format_rating, format_sales, stat_label};
