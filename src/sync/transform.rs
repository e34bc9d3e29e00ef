//! Koordinaten-Umrechnung zwischen 2D-Canvas und 3D-Weltraum.
//!
//! Beide Richtungen teilen sich dieselben benannten Konstanten; die
//! Rücktransformation ist die exakte Inverse.

use glam::{Vec2, Vec3};

/// 40 Canvas-Einheiten entsprechen 1 Meter.
pub const WORLD_SCALE: f32 = 1.0 / 40.0;
/// Canvas-Zentrum x (Ursprungs-Konvention beider Richtungen).
pub const ORIGIN_OFFSET_X: f32 = 400.0;
/// Canvas-Zentrum y, wird zur 3D-z-Achse.
pub const ORIGIN_OFFSET_Z: f32 = 300.0;
/// Feste Aufhängehöhe der Mirrors (Meter über Boden).
pub const MIRROR_HEIGHT_Y: f32 = 0.5;
/// Längen-Umrechnung: 2D speichert Zentimeter, 3D Meter.
pub const CM_PER_M: f32 = 100.0;

/// 2D-Canvas-Position → 3D-Weltposition (y fest auf Aufhängehöhe).
pub fn to_world_position(canvas: Vec2) -> Vec3 {
    Vec3::new(
        (canvas.x - ORIGIN_OFFSET_X) * WORLD_SCALE,
        MIRROR_HEIGHT_Y,
        (canvas.y - ORIGIN_OFFSET_Z) * WORLD_SCALE,
    )
}

/// 3D-Weltposition → 2D-Canvas-Position (y-Komponente wird verworfen).
pub fn to_canvas_position(world: Vec3) -> Vec2 {
    Vec2::new(
        world.x / WORLD_SCALE + ORIGIN_OFFSET_X,
        world.z / WORLD_SCALE + ORIGIN_OFFSET_Z,
    )
}

/// 2D-Rotation (Grad) → 3D-Rotation um die y-Achse (Radiant).
pub fn to_world_rotation(deg: i32) -> f32 {
    deg as f32 * std::f32::consts::PI / 180.0
}

/// 3D-y-Rotation (Radiant) → 2D-Rotation in Grad, normalisiert auf [0, 360).
pub fn to_canvas_rotation(rad: f32) -> i32 {
    let deg = (rad * 180.0 / std::f32::consts::PI).round() as i32;
    (deg % 360 + 360) % 360
}

/// Rohrlänge Zentimeter → Meter.
pub fn length_to_meters(cm: u32) -> f32 {
    cm as f32 / CM_PER_M
}
