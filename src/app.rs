use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MusicRecommenderApp {
    pub state: AppState,
}

impl MusicRecommenderApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for MusicRecommenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: query form above the results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::query_form(ui, &mut self.state);
            ui.separator();
            results::results_view(ui, &self.state);
        });
    }
}
