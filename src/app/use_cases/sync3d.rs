//! Use-Cases für 3D-seitige Bearbeitungen und Port-Verbindungen.

use glam::Vec3;

use crate::app::AppState;
use crate::sync::PortId;

/// Schreibt eine Mirror-Bewegung aus dem 3D-Viewer in die 2D-Szene zurück.
///
/// Die Bridge setzt dabei ihr Reentrancy-Gate, damit der anschließende
/// Abgleich die 3D-Seite nicht erneut anfasst.
pub fn apply_mirror_move(state: &mut AppState, id: u64, world_pos: Vec3, rotation_y: f32) {
    let Some(edit) = state.sync.begin_mirror_edit(id, world_pos, rotation_y) else {
        // Erwartetes Rennen: Mirror wurde zwischenzeitlich entfernt
        return;
    };

    if let Some(component) = state.scene.find_mut(edit.component_id) {
        component.move_to(edit.position, None);
        component.set_rotation(edit.rotation_deg);
    }
    state.refresh_derived();
    state.sync.finish_mirror_edit();
}

/// Verbindet zwei Ports; das Ergebnis landet als Statusmeldung im UI.
pub fn connect_ports(state: &mut AppState, comp1: u64, port1: PortId, comp2: u64, port2: PortId) {
    if state.sync.connect(comp1, port1, comp2, port2) {
        state.ui.status_message = Some("Ports verbunden".to_string());
    } else {
        state.ui.status_message = Some("Verbindung nicht moeglich".to_string());
    }
}

/// Löst die Verbindung an einem Port.
pub fn disconnect_port(state: &mut AppState, comp: u64, port: PortId) {
    state.sync.disconnect(comp, port);
}

/// Taktet laufende Mirror-Animationen weiter.
pub fn tick_animations(state: &mut AppState, dt: f32) {
    state.sync.tick_animations(dt);
}
