mod app;
mod config;
mod data;
mod state;
mod ui;

use app::MusicRecommenderApp;
use config::{Config, MIN_HEIGHT, MIN_WIDTH};
use data::loader::load_datasets;
use eframe::egui;
use state::AppState;

const APP_TITLE: &str = "Music Recommendation System";

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::default_config_path() {
        Ok(path) => {
            log::info!("Using config {}", path.display());
            Config::load_or_default(&path)
        }
        Err(e) => {
            log::warn!("{e}. Using defaults.");
            Config::default()
        }
    };

    if config.datasets.is_empty() {
        log::warn!("No datasets configured; add CSV paths to `datasets` in the config file");
    }

    let state = match load_datasets(&config.datasets) {
        Ok(table) => {
            if table.is_empty() {
                log::warn!("No tracks loaded; every query will report no recommendations");
            }
            log::info!(
                "Loaded {} tracks from {} files with columns {:?}",
                table.len(),
                table.sources().len(),
                table.columns()
            );
            AppState::new(table)
        }
        Err(e) => {
            log::error!("Failed to load data: {e}");
            AppState::with_load_error(e)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([
                config.window.width.max(MIN_WIDTH),
                config.window.height.max(MIN_HEIGHT),
            ])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(MusicRecommenderApp::new(state)))),
    )
}
