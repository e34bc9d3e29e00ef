//! Handler für Ansichts-Umschalter und Zoom.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die Raster-Anzeige um.
pub fn toggle_grid(state: &mut AppState) {
    use_cases::view::toggle_grid(state);
}

/// Schaltet den Snap um.
pub fn toggle_snap(state: &mut AppState) {
    use_cases::view::toggle_snap(state);
}

/// Schaltet die 3D-Ansicht um.
pub fn toggle_3d(state: &mut AppState) {
    use_cases::view::toggle_3d(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::view::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::view::zoom_out(state);
}

/// Setzt den Zoom zurück.
pub fn reset_zoom(state: &mut AppState) {
    use_cases::view::reset_zoom(state);
}
