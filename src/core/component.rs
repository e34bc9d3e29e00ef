//! Eine platzierte Komponente: Katalogtyp plus Position, Rotation, Länge.

use glam::Vec2;

use super::catalog::PartKind;
use crate::shared::options::{PIPE_LENGTH_DEFAULT_CM, PIPE_LENGTH_MAX_CM, PIPE_LENGTH_MIN_CM};

/// Platzierte Instanz eines Katalogtyps.
///
/// `position` ist die linke obere Ecke des Footprints in Canvas-Einheiten.
/// `rotation_deg` ist immer in [0, 360) normalisiert; die UI bietet nur
/// ±90°-Schritte an, das Modell toleriert aber beliebige Werte.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Sitzungsweit eindeutige ID (wird nie wiederverwendet)
    pub id: u64,
    /// Katalogtyp
    pub kind: PartKind,
    /// Linke obere Ecke in Canvas-Einheiten
    pub position: Vec2,
    /// Rotation in Grad, normalisiert auf [0, 360)
    pub rotation_deg: i32,
    /// Rohrlänge in Zentimetern (nur Rohrsegmente)
    pub length_cm: Option<u32>,
    /// Ob die Komponente aktuell selektiert ist
    pub selected: bool,
}

impl Component {
    /// Erstellt eine Komponente mit Typ-Defaults (Rotation 0, Rohrlänge 100 cm).
    pub fn new(id: u64, kind: PartKind, position: Vec2) -> Self {
        Self {
            id,
            kind,
            position,
            rotation_deg: 0,
            length_cm: kind.is_pipe().then_some(PIPE_LENGTH_DEFAULT_CM),
            selected: false,
        }
    }

    /// Rotiert um `delta_deg`; das Ergebnis bleibt auch bei negativen
    /// Deltas in [0, 360).
    pub fn rotate(&mut self, delta_deg: i32) {
        self.rotation_deg = ((self.rotation_deg + delta_deg) % 360 + 360) % 360;
    }

    /// Setzt die Rotation absolut, normalisiert auf [0, 360).
    pub fn set_rotation(&mut self, deg: i32) {
        self.rotation_deg = (deg % 360 + 360) % 360;
    }

    /// Setzt die Rohrlänge: gerundet auf ganze Zentimeter und auf
    /// [10, 300] geklemmt. Nicht-finite Werte werden ignoriert (der
    /// vorherige Wert bleibt erhalten), Nicht-Rohre sind ein No-op.
    ///
    /// Gibt `true` zurück, wenn ein Wert übernommen wurde.
    pub fn set_length(&mut self, value: f64) -> bool {
        if !self.kind.is_pipe() || !value.is_finite() {
            return false;
        }
        let cm = (value.round() as i64)
            .clamp(PIPE_LENGTH_MIN_CM as i64, PIPE_LENGTH_MAX_CM as i64) as u32;
        self.length_cm = Some(cm);
        true
    }

    /// Verschiebt die Komponente; mit aktivem Raster wird auf
    /// `round(v / grid) * grid` quantisiert.
    pub fn move_to(&mut self, position: Vec2, grid: Option<f32>) {
        self.position = match grid {
            Some(size) if size > 0.0 => super::snap::grid_snap(position, size),
            _ => position,
        };
    }

    /// Footprint in Canvas-Einheiten (Rohre längenabhängig).
    pub fn footprint(&self) -> Vec2 {
        self.kind.footprint(self.length_cm)
    }
}
