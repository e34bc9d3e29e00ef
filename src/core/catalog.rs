//! Statischer Teile-Katalog: Rohrsegment, Winkel, T-Stück, Wandhalter.

use glam::Vec2;

use crate::shared::options::{DEFAULT_FOOTPRINT, PX_PER_CM};

/// Katalogtyp eines Bauteils.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Gerades Rohrsegment mit variabler Länge
    PipeSegment,
    /// 90°-Winkelverbinder
    ElbowJoint,
    /// T-Verbinder mit drei Anschlüssen
    TeeJoint,
    /// Wandhalterung
    WallMount,
}

/// Statische Katalog-Metadaten eines Teiletyps.
#[derive(Debug, Clone, Copy)]
pub struct PartSpec {
    /// Stabile String-ID (zugleich Wire-Format im JSON-Export)
    pub id: &'static str,
    /// i18n-Schlüssel für den Anzeigenamen (Auflösung ist Sache der UI)
    pub name_key: &'static str,
    /// Icon-Glyph für Sidebar/Toolbar
    pub icon: &'static str,
    /// Standard-Footprint in Canvas-Einheiten [Breite, Höhe]
    pub footprint: [f32; 2],
    /// Flächenfarbe für 2D-Darstellung und PNG-Export (RGB)
    pub color: [u8; 3],
}

/// Rohr-Außendurchmesser in Millimetern (Katalog-Standard).
pub const PIPE_DIAMETER_MM: f32 = 50.0;
/// Rohr-Wandstärke in Millimetern.
pub const PIPE_WALL_THICKNESS_MM: f32 = 3.0;

impl PartKind {
    /// Alle Katalogtypen in Sidebar-Reihenfolge.
    pub const ALL: [PartKind; 4] = [
        PartKind::PipeSegment,
        PartKind::ElbowJoint,
        PartKind::TeeJoint,
        PartKind::WallMount,
    ];

    /// Katalog-Metadaten des Typs.
    pub fn spec(self) -> &'static PartSpec {
        match self {
            PartKind::PipeSegment => &PartSpec {
                id: "pipe-segment",
                name_key: "pipeSegment",
                icon: "─",
                footprint: [200.0, 20.0],
                color: [0x6c, 0x75, 0x7d],
            },
            PartKind::ElbowJoint => &PartSpec {
                id: "elbow-joint",
                name_key: "elbowJoint",
                icon: "└",
                footprint: [40.0, 40.0],
                color: [0x0d, 0x6e, 0xfd],
            },
            PartKind::TeeJoint => &PartSpec {
                id: "tee-joint",
                name_key: "teeJoint",
                icon: "┬",
                footprint: [40.0, 60.0],
                color: [0x19, 0x87, 0x54],
            },
            PartKind::WallMount => &PartSpec {
                id: "wall-mount",
                name_key: "wallMount",
                icon: "⊢",
                footprint: [30.0, 30.0],
                color: [0xdc, 0x35, 0x45],
            },
        }
    }

    /// Stabile String-ID (Wire-Format).
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    /// Parst eine Wire-ID zurück in den Katalogtyp.
    pub fn from_id(id: &str) -> Option<PartKind> {
        PartKind::ALL.iter().copied().find(|k| k.id() == id)
    }

    /// Ob der Typ eine einstellbare Länge besitzt.
    pub fn is_pipe(self) -> bool {
        matches!(self, PartKind::PipeSegment)
    }

    /// Ob für den Typ eine 3D-Darstellung existiert.
    ///
    /// T-Stück und Wandhalter haben (noch) keine Mirror-Implementierung;
    /// sie bleiben reine 2D-Komponenten.
    pub fn has_mirror(self) -> bool {
        matches!(self, PartKind::PipeSegment | PartKind::ElbowJoint)
    }

    /// Footprint in Canvas-Einheiten; bei Rohren folgt die Breite der Länge.
    pub fn footprint(self, length_cm: Option<u32>) -> Vec2 {
        let base = self.spec().footprint;
        match (self, length_cm) {
            (PartKind::PipeSegment, Some(cm)) => Vec2::new(cm as f32 * PX_PER_CM, base[1]),
            _ if base == [0.0, 0.0] => Vec2::splat(DEFAULT_FOOTPRINT),
            _ => Vec2::new(base[0], base[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_id_roundtrip() {
        for kind in PartKind::ALL {
            assert_eq!(PartKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(PartKind::from_id("flange"), None);
    }

    #[test]
    fn test_pipe_footprint_follows_length() {
        let fp = PartKind::PipeSegment.footprint(Some(150));
        assert_eq!(fp, Vec2::new(300.0, 20.0));

        let fp = PartKind::ElbowJoint.footprint(None);
        assert_eq!(fp, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_mirror_capability() {
        assert!(PartKind::PipeSegment.has_mirror());
        assert!(PartKind::ElbowJoint.has_mirror());
        assert!(!PartKind::TeeJoint.has_mirror());
        assert!(!PartKind::WallMount.has_mirror());
    }
}
