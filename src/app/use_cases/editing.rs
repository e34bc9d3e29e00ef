//! Use-Cases für Platzieren, Bewegen und Bearbeiten von Komponenten.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{alignment_guides, snap_to_guides, PartKind};

/// Setzt das Platzier-Werkzeug; `None` entwaffnet.
///
/// Bewaffnen hebt eine bestehende Selektion auf; Klicks gehen ab jetzt
/// ans Platzieren, nicht an den Hit-Test.
pub fn arm_tool(state: &mut AppState, kind: Option<PartKind>) {
    if kind.is_some() {
        super::selection::select(state, None);
    }
    state.editor.armed_tool = kind;
    if let Some(kind) = kind {
        log::info!("Werkzeug bewaffnet: {}", kind.id());
    }
}

/// Platziert eine Komponente und selektiert sie.
///
/// Das Werkzeug bleibt bewaffnet, damit mehrere Teile in Folge gesetzt
/// werden können; Escape entwaffnet.
pub fn place_component(state: &mut AppState, kind: PartKind, pos: Vec2) {
    let grid = state
        .view
        .snap_enabled
        .then_some(state.options.grid_size);
    let mut position = pos;
    if let Some(grid_size) = grid {
        position = crate::core::grid_snap(position, grid_size);
    }

    let id = state.scene.spawn(kind, position);
    super::selection::select(state, Some(id));
    state.refresh_derived();
    log::info!("Komponente {} platziert: {}", id, kind.id());
}

/// Bewegt eine Komponente während eines Drags.
///
/// Raster-Snap wird live angewendet; Kanten-Ausrichtung wird nur als
/// Guide angezeigt und erst beim Drag-Ende eingerastet.
pub fn move_component(state: &mut AppState, id: u64, pos: Vec2) {
    let grid = state
        .view
        .snap_enabled
        .then_some(state.options.grid_size);
    let Some(component) = state.scene.find_mut(id) else {
        return;
    };
    component.move_to(pos, grid);

    state.ui.guides = if state.view.snap_enabled {
        alignment_guides(&state.scene, id, state.options.snap_distance)
    } else {
        Vec::new()
    };
    state.refresh_derived();
}

/// Drag-Ende: finale Ausrichtung an Nachbarkanten anwenden.
pub fn end_drag(state: &mut AppState, id: u64) {
    if state.view.snap_enabled && state.scene.contains(id) {
        let snapped = snap_to_guides(&state.scene, id, state.options.snap_distance);
        if let Some(component) = state.scene.find_mut(id) {
            component.move_to(snapped, None);
        }
    }
    state.ui.guides.clear();
    state.refresh_derived();
}

/// Löscht die selektierte Komponente und räumt die Selektion auf.
pub fn delete_selected(state: &mut AppState) {
    let Some(id) = state.selection.selected_id else {
        return;
    };
    if state.scene.remove(id).is_some() {
        log::info!("Komponente {} geloescht", id);
    }
    super::selection::select(state, None);
    state.refresh_derived();
}

/// Dreht die selektierte Komponente um das Delta.
pub fn rotate_selected(state: &mut AppState, delta_deg: i32) {
    let Some(id) = state.selection.selected_id else {
        return;
    };
    if let Some(component) = state.scene.find_mut(id) {
        component.rotate(delta_deg);
        state.refresh_derived();
    }
}

/// Setzt die Position einer Komponente (Eigenschaften-Panel).
pub fn set_position(state: &mut AppState, id: u64, pos: Vec2) {
    if !pos.x.is_finite() || !pos.y.is_finite() {
        return;
    }
    if let Some(component) = state.scene.find_mut(id) {
        component.move_to(pos, None);
        state.refresh_derived();
    }
}

/// Setzt die Rotation einer Komponente (Eigenschaften-Panel).
pub fn set_rotation(state: &mut AppState, id: u64, deg: i32) {
    if let Some(component) = state.scene.find_mut(id) {
        component.set_rotation(deg);
        state.refresh_derived();
    }
}

/// Setzt die Rohrlänge; ungültige Werte werden vom Setter verworfen,
/// der bisherige Wert bleibt dann erhalten.
pub fn set_length(state: &mut AppState, id: u64, value: f64) {
    let Some(component) = state.scene.find_mut(id) else {
        return;
    };
    if component.set_length(value) {
        state.refresh_derived();
    }
}

/// Leert die Szene vollständig (inkl. 3D-Teardown).
pub fn clear_scene(state: &mut AppState) {
    let count = state.scene.len();
    state.scene.clear();
    state.sync.clear();
    super::selection::select(state, None);
    state.refresh_derived();
    log::info!("Szene geleert ({} Komponenten entfernt)", count);
}
