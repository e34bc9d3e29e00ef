//! Handler für Datei-Dialoge und Import/Export.

use anyhow::Result;

use crate::app::use_cases;
use crate::app::AppState;

/// Fordert den JSON-Export-Dialog an.
pub fn request_export_json(state: &mut AppState) {
    state.ui.show_export_json_dialog = true;
}

/// Fordert den PNG-Export-Dialog an.
pub fn request_export_png(state: &mut AppState) {
    state.ui.show_export_png_dialog = true;
}

/// Fordert den Import-Dialog an.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Exportiert das Design als JSON.
pub fn export_json(state: &mut AppState, path: &str) -> Result<()> {
    use_cases::file_io::export_json(state, path)
}

/// Exportiert die Szene als PNG.
pub fn export_png(state: &mut AppState, path: &str) -> Result<()> {
    use_cases::file_io::export_png(state, path)
}

/// Importiert eine Design-Datei.
pub fn import_design(state: &mut AppState, path: &str) -> Result<()> {
    use_cases::file_io::import_design(state, path)
}
