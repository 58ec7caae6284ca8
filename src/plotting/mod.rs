pub mod chart;
pub mod styles;

pub use chart::{render_rating_histogram, render_sales_chart, CHART_HEIGHT, CHART_WIDTH};
