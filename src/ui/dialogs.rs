//! Native Dateidialoge für Import und Export.

use crate::app::{AppIntent, UiState};

/// Öffnet angeforderte Dateidialoge und gibt die gewählten Pfade als
/// Intents zurück. Abbruch im Dialog erzeugt kein Event.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Rack-Design", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ImportFileSelected {
                path: path.display().to_string(),
            });
        }
    }

    if ui_state.show_export_json_dialog {
        ui_state.show_export_json_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Rack-Design", &["json"])
            .set_file_name("rack-design.json")
            .save_file()
        {
            events.push(AppIntent::ExportJsonPathSelected {
                path: path.display().to_string(),
            });
        }
    }

    if ui_state.show_export_png_dialog {
        ui_state.show_export_png_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG-Bild", &["png"])
            .set_file_name("rack-design.png")
            .save_file()
        {
            events.push(AppIntent::ExportPngPathSelected {
                path: path.display().to_string(),
            });
        }
    }

    events
}
