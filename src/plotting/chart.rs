//! Chart rendering with plotters.
//!
//! Charts are drawn into an in-memory RGB buffer so the GUI can upload
//! them as a texture without touching the filesystem. The two renderers
//! cover the sales bar chart and the rating histogram.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

use crate::plotting::styles::{ChartStyle, ChartTheme};
use crate::types::GameRecord;

type PlotError = Box<dyn Error + Send + Sync>;

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 480;

/// Number of bins in the rating histogram.
const HISTOGRAM_BINS: usize = 10;

/// Render the per-title sales bar chart into an RGB888 buffer of
/// `CHART_WIDTH * CHART_HEIGHT` pixels.
pub fn render_sales_chart(games: &[GameRecord]) -> Result<Vec<u8>, PlotError> {
    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        draw_sales_chart(games, &root)?;
        root.present()?;
    }
    Ok(buffer)
}

/// Render the rating histogram into an RGB888 buffer of
/// `CHART_WIDTH * CHART_HEIGHT` pixels.
pub fn render_rating_histogram(games: &[GameRecord]) -> Result<Vec<u8>, PlotError> {
    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        draw_rating_histogram(games, &root)?;
        root.present()?;
    }
    Ok(buffer)
}

fn draw_sales_chart(
    games: &[GameRecord],
    root: &DrawingArea<BitMapBackend, Shift>,
) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();
    root.fill(&theme.background_color)?;

    let max_sales = games
        .iter()
        .map(|g| g.sales_millions)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Game Sales (Millions)",
            ("sans-serif", style.caption_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(120)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(0f64..games.len().max(1) as f64, 0f64..max_sales * 1.1)?;

    let titles: Vec<String> = games.iter().map(|g| g.title.clone()).collect();
    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        if idx < titles.len() {
            titles[idx].clone()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .y_desc("Sales (M)")
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .x_labels(games.len().max(1))
        .x_label_formatter(&x_label_formatter)
        .x_label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        .draw()?;

    chart.draw_series(games.iter().enumerate().map(|(i, g)| {
        let x0 = i as f64 + (1.0 - style.bar_width) / 2.0;
        let x1 = x0 + style.bar_width;
        Rectangle::new([(x0, 0.0), (x1, g.sales_millions)], theme.bar_color.filled())
    }))?;

    Ok(())
}

fn draw_rating_histogram(
    games: &[GameRecord],
    root: &DrawingArea<BitMapBackend, Shift>,
) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();
    root.fill(&theme.background_color)?;

    let (bin_start, bin_width, counts) = rating_bins(games);
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    let x_end = bin_start + bin_width * HISTOGRAM_BINS as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Rating Distribution",
            ("sans-serif", style.caption_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .set_all_label_area_size(style.label_area_size)
        .build_cartesian_2d(bin_start..x_end, 0f64..max_count as f64 * 1.1)?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .x_desc("Rating")
        .y_desc("Number of Games")
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = bin_start + i as f64 * bin_width;
        let x1 = x0 + bin_width;
        Rectangle::new([(x0, 0.0), (x1, count as f64)], theme.bar_color.filled())
    }))?;

    Ok(())
}

/// Bucket ratings into `HISTOGRAM_BINS` equal-width bins spanning the
/// observed range. A degenerate range (empty table, or all ratings equal)
/// widens to a unit span so the chart still has valid axes.
fn rating_bins(games: &[GameRecord]) -> (f64, f64, Vec<usize>) {
    let min = games.iter().map(|g| g.rating).fold(f64::INFINITY, f64::min);
    let max = games
        .iter()
        .map(|g| g.rating)
        .fold(f64::NEG_INFINITY, f64::max);

    let (min, max) = if min.is_finite() && max > min {
        (min, max)
    } else if min.is_finite() {
        (min - 0.5, min + 0.5)
    } else {
        (0.0, 10.0)
    };

    let bin_width = (max - min) / HISTOGRAM_BINS as f64;
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for g in games {
        let bin = (((g.rating - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }
    (min, bin_width, counts)
}
