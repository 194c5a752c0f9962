use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{Recommendation, ResultSet};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results (below the form)
// ---------------------------------------------------------------------------

/// Render the outcome of the last query.
pub fn results_view(ui: &mut Ui, state: &AppState) {
    match &state.outcome {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("Enter a release date, artist or genre and press Get Recommendations.");
            });
        }
        Some(Recommendation::NoMatches) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(state.output_text()).size(16.0));
            });
        }
        Some(Recommendation::Matches(rs)) => {
            ui.horizontal(|ui: &mut Ui| {
                ui.label(format!("{} recommendations", rs.len()));
                if ui.small_button("Copy as text").clicked() {
                    ui.ctx().copy_text(state.output_text());
                }
            });
            ui.add_space(4.0);
            ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                result_table(ui, rs);
            });
        }
    }
}

fn result_table(ui: &mut Ui, rs: &ResultSet) {
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(90.0).clip(true), rs.columns.len())
        .header(row_height, |mut header| {
            for col in &rs.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, rs.rows.len(), |mut row| {
                let cells = &rs.rows[row.index()];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell.to_string());
                    });
                }
            });
        });
}
