use egui::{ComboBox, Context};
use egui_extras::{Column, TableBuilder};

use super::{App, View};
use crate::analysis::stats::{genre_summaries, unique_genres};
use crate::plotting::{render_rating_histogram, render_sales_chart, CHART_HEIGHT, CHART_WIDTH};
use crate::utils::{format_playtime, format_price, format_rating, format_sales};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context) {
    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Analysis Options");
        ui.separator();

        if ui.button("View All Games").clicked() {
            app.select_view(View::AllGames);
        }
        if ui.button("Genre Analysis").clicked() {
            app.select_view(View::GenreAnalysis);
        }
        if ui.button("Sales Chart").clicked() {
            app.select_view(View::SalesChart);
        }
        if ui.button("Rating Distribution").clicked() {
            app.select_view(View::RatingDistribution);
        }

        ui.separator();
        ui.label("Filters");

        ui.label("Genre:");
        let genres = unique_genres(&app.games);
        ComboBox::new("genre_filter", "")
            .selected_text(app.genre_filter.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.genre_filter, "All".to_string(), "All");
                for genre in &genres {
                    ui.selectable_value(&mut app.genre_filter, genre.clone(), genre);
                }
            });

        ui.label("Year:");
        ui.text_edit_singleline(&mut app.year_filter);

        if ui.button("Apply Filters").clicked() {
            app.apply_filters();
        }

        if let Some(message) = &app.error_message {
            ui.colored_label(egui::Color32::RED, message);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Game Data Analysis");
        ui.separator();

        match app.current_view {
            View::AllGames => draw_games_table(app, ui),
            View::GenreAnalysis => draw_genre_analysis(app, ui),
            View::SalesChart | View::RatingDistribution => {
                if let Some(texture) = &app.chart_texture {
                    ui.image(texture);
                }
            }
        }
    });

    if app.chart_dirty {
        refresh_chart(app, ctx);
        app.chart_dirty = false;
    }
}

fn draw_games_table(app: &App, ui: &mut egui::Ui) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(130.0))
        .columns(Column::auto().at_least(60.0), 5)
        .header(20.0, |mut header| {
            for title in ["Title", "Genre", "Year", "Rating", "Sales", "Playtime", "Price"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for game in &app.visible {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&game.title);
                    });
                    row.col(|ui| {
                        ui.label(&game.genre);
                    });
                    row.col(|ui| {
                        ui.label(game.release_year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_rating(game.rating));
                    });
                    row.col(|ui| {
                        ui.label(format_sales(game.sales_millions));
                    });
                    row.col(|ui| {
                        ui.label(format_playtime(game.playtime_hours));
                    });
                    row.col(|ui| {
                        ui.label(format_price(game.price));
                    });
                });
            }
        });
}

fn draw_genre_analysis(app: &App, ui: &mut egui::Ui) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(150.0))
        .columns(Column::auto().at_least(90.0), 3)
        .header(20.0, |mut header| {
            for title in ["Genre", "Games", "Avg Rating", "Total Sales"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            // Always computed over the full table; listing filters do not
            // apply here
            for summary in genre_summaries(&app.games) {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&summary.genre);
                    });
                    row.col(|ui| {
                        ui.label(summary.game_count.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_rating(summary.avg_rating));
                    });
                    row.col(|ui| {
                        ui.label(format_sales(summary.total_sales_millions));
                    });
                });
            }
        });
}

fn refresh_chart(app: &mut App, ctx: &Context) {
    let rendered = match app.current_view {
        View::SalesChart => render_sales_chart(&app.games),
        View::RatingDistribution => render_rating_histogram(&app.games),
        _ => return,
    };

    match rendered {
        Ok(buffer) => {
            let image = egui::ColorImage::from_rgb(
                [CHART_WIDTH as usize, CHART_HEIGHT as usize],
                &buffer,
            );
            app.chart_texture =
                Some(ctx.load_texture("chart_texture", image, egui::TextureOptions::LINEAR));
        }
        Err(e) => {
            log::error!("chart rendering failed: {}", e);
            app.error_message = Some(format!("Chart rendering failed: {}", e));
        }
    }
}
