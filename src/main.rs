//! Game Data Analysis Tool
//!
//! A GUI application for browsing and summarizing the game dataset.

use eframe::egui;

use gamestats::GameStatsApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Game Data Analysis"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Game Data Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(GameStatsApp::default()) as Box<dyn eframe::App>)),
    ) {
        log::error!("error running application: {}", e);
    }
}
