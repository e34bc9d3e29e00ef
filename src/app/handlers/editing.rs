//! Handler für Platzieren, Bewegen und Bearbeiten von Komponenten.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PartKind;

/// Setzt das Platzier-Werkzeug.
pub fn arm_tool(state: &mut AppState, kind: Option<PartKind>) {
    use_cases::editing::arm_tool(state, kind);
}

/// Platziert eine Komponente an der Klickposition.
pub fn place_component(state: &mut AppState, kind: PartKind, pos: Vec2) {
    use_cases::editing::place_component(state, kind, pos);
}

/// Bewegt eine Komponente während eines Drags.
pub fn move_component(state: &mut AppState, id: u64, pos: Vec2) {
    use_cases::editing::move_component(state, id, pos);
}

/// Schließt einen Drag ab.
pub fn end_drag(state: &mut AppState, id: u64) {
    use_cases::editing::end_drag(state, id);
}

/// Löscht die selektierte Komponente.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Dreht die selektierte Komponente.
pub fn rotate_selected(state: &mut AppState, delta_deg: i32) {
    use_cases::editing::rotate_selected(state, delta_deg);
}

/// Setzt die Position aus dem Eigenschaften-Panel.
pub fn set_position(state: &mut AppState, id: u64, pos: Vec2) {
    use_cases::editing::set_position(state, id, pos);
}

/// Setzt die Rotation aus dem Eigenschaften-Panel.
pub fn set_rotation(state: &mut AppState, id: u64, deg: i32) {
    use_cases::editing::set_rotation(state, id, deg);
}

/// Setzt die Rohrlänge.
pub fn set_length(state: &mut AppState, id: u64, value: f64) {
    use_cases::editing::set_length(state, id, value);
}

/// Leert die Szene.
pub fn clear_scene(state: &mut AppState) {
    use_cases::editing::clear_scene(state);
}
