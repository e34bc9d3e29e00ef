//! Use-Cases für Ansichts-Umschalter und Zoom.

use crate::app::AppState;
use crate::shared::options::ZOOM_STEP;

/// Schaltet die Raster-Anzeige um.
pub fn toggle_grid(state: &mut AppState) {
    state.view.grid_visible = !state.view.grid_visible;
}

/// Schaltet Raster- und Kanten-Snap um.
pub fn toggle_snap(state: &mut AppState) {
    state.view.snap_enabled = !state.view.snap_enabled;
}

/// Schaltet die 3D-Ansicht um; beim Einschalten werden die Mirrors
/// sofort nachgezogen.
pub fn toggle_3d(state: &mut AppState) {
    state.view.mode_3d = !state.view.mode_3d;
    if state.view.mode_3d {
        state.sync.sync_from_2d(&state.scene);
    }
    log::info!("3D-Ansicht: {}", state.view.mode_3d);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let zoom = state.view.zoom * ZOOM_STEP;
    state.view.set_zoom(zoom);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let zoom = state.view.zoom / ZOOM_STEP;
    state.view.set_zoom(zoom);
}

/// Setzt den Zoom auf 100% zurück.
pub fn reset_zoom(state: &mut AppState) {
    state.view.set_zoom(1.0);
}
