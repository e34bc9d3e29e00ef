//! Handler für 3D-seitige Bearbeitungen und Port-Verbindungen.

use glam::Vec3;

use crate::app::use_cases;
use crate::app::AppState;
use crate::sync::PortId;

/// Schreibt eine 3D-Bewegung in die 2D-Szene zurück.
pub fn apply_mirror_move(state: &mut AppState, id: u64, world_pos: Vec3, rotation_y: f32) {
    use_cases::sync3d::apply_mirror_move(state, id, world_pos, rotation_y);
}

/// Verbindet zwei Ports.
pub fn connect_ports(
    state: &mut AppState,
    comp1: u64,
    port1: PortId,
    comp2: u64,
    port2: PortId,
) {
    use_cases::sync3d::connect_ports(state, comp1, port1, comp2, port2);
}

/// Löst die Verbindung an einem Port.
pub fn disconnect_port(state: &mut AppState, comp: u64, port: PortId) {
    use_cases::sync3d::disconnect_port(state, comp, port);
}

/// Taktet laufende Animationen weiter.
pub fn tick_animations(state: &mut AppState, dt: f32) {
    use_cases::sync3d::tick_animations(state, dt);
}
