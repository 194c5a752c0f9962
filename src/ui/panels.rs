use eframe::egui::{self, Key, RichText, TextEdit, Ui};

use crate::state::{AppState, Status};

const INPUT_WIDTH: f32 = 260.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar and a summary of what was loaded.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        let table = state.table();
        ui.label(format!(
            "{} tracks from {} files",
            table.len(),
            table.sources().len()
        ))
        .on_hover_ui(|ui: &mut Ui| {
            for src in table.sources() {
                ui.label(format!(
                    "{}  ({}, {} rows)",
                    src.path.display(),
                    src.encoding,
                    src.rows
                ));
            }
        });

        if let Some(msg) = &state.load_error {
            ui.separator();
            let color = ui.visuals().error_fg_color;
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Query form
// ---------------------------------------------------------------------------

/// Render the three filter inputs and the action buttons.
pub fn query_form(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("Music Recommendation System").strong());
    });
    ui.add_space(12.0);

    let mut submit = false;

    egui::Grid::new("query_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            submit |= labelled_input(ui, "Enter Release Date:", &mut state.release_date_input);
            submit |= labelled_input(ui, "Enter Artist:", &mut state.artist_input);
            submit |= labelled_input(ui, "Enter Genre:", &mut state.genre_input);
        });

    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add(egui::Button::new(RichText::new("Get Recommendations").strong()))
            .clicked()
        {
            submit = true;
        }
        if ui.button("Clear").clicked() {
            state.clear();
        }

        let status = match &state.status {
            Some(Status::Warning(msg)) => Some((msg, ui.visuals().warn_fg_color)),
            Some(Status::Error(msg)) => Some((msg, ui.visuals().error_fg_color)),
            None => None,
        };
        if let Some((msg, color)) = status {
            ui.label(RichText::new(msg).color(color));
        }
    });

    if submit {
        state.submit();
    }
}

/// One grid row. Returns true when Enter was pressed in the field.
fn labelled_input(ui: &mut Ui, label: &str, value: &mut String) -> bool {
    ui.label(label);
    let response = ui.add(TextEdit::singleline(value).desired_width(INPUT_WIDTH));
    ui.end_row();
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
