//! Typisierte Anschluss-Ports der 3D-Mirrors und advisorische Verbindungen.

use glam::Vec3;

use crate::core::PartKind;

/// Benannter Anschlusspunkt eines Mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortId {
    /// Linkes Rohrende bzw. linker Stutzen
    Left,
    /// Rechtes Rohrende
    Right,
    /// Unterer Stutzen (Winkel)
    Bottom,
}

/// Steckrichtung eines Ports; gültig ist nur male ↔ female.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortPolarity {
    /// Steckendes Ende (Rohrenden)
    Male,
    /// Aufnehmende Muffe (Fitting-Stutzen)
    Female,
}

/// Advisorische Verbindung zweier Ports.
///
/// Verbindungen sind reine Metadaten für Verbindungslinien im Viewer;
/// sie beschränken Position und Rotation der Komponenten nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortConnection {
    /// Erste Komponente
    pub comp1: u64,
    /// Port der ersten Komponente
    pub port1: PortId,
    /// Zweite Komponente
    pub comp2: u64,
    /// Port der zweiten Komponente
    pub port2: PortId,
}

impl PortId {
    /// Wire-Format im JSON-Export.
    pub fn as_str(self) -> &'static str {
        match self {
            PortId::Left => "left",
            PortId::Right => "right",
            PortId::Bottom => "bottom",
        }
    }

    /// Parst das Wire-Format.
    pub fn from_str(s: &str) -> Option<PortId> {
        match s {
            "left" => Some(PortId::Left),
            "right" => Some(PortId::Right),
            "bottom" => Some(PortId::Bottom),
            _ => None,
        }
    }
}

/// Port-Tabelle je Katalogtyp: Rohrenden sind male, Fitting-Muffen female.
/// Typen ohne Mirror haben keine Ports.
pub fn ports_for(kind: PartKind) -> &'static [(PortId, PortPolarity)] {
    match kind {
        PartKind::PipeSegment => &[
            (PortId::Left, PortPolarity::Male),
            (PortId::Right, PortPolarity::Male),
        ],
        PartKind::ElbowJoint => &[
            (PortId::Left, PortPolarity::Female),
            (PortId::Bottom, PortPolarity::Female),
        ],
        PartKind::TeeJoint | PartKind::WallMount => &[],
    }
}

/// Polarität eines Ports, falls der Typ ihn besitzt.
pub fn polarity_of(kind: PartKind, port: PortId) -> Option<PortPolarity> {
    ports_for(kind)
        .iter()
        .find(|(id, _)| *id == port)
        .map(|&(_, polarity)| polarity)
}

/// Lokale Port-Position relativ zum Mirror-Ursprung (Meter).
///
/// Rohr-Ports wandern mit der Länge; Winkel-Stutzen sitzen am Bogenradius.
pub fn local_port_position(kind: PartKind, port: PortId, pipe_length_m: f32) -> Option<Vec3> {
    match (kind, port) {
        (PartKind::PipeSegment, PortId::Left) => Some(Vec3::new(-pipe_length_m / 2.0, 0.0, 0.0)),
        (PartKind::PipeSegment, PortId::Right) => Some(Vec3::new(pipe_length_m / 2.0, 0.0, 0.0)),
        (PartKind::ElbowJoint, PortId::Left) => {
            Some(Vec3::new(-super::mirror::ELBOW_BEND_RADIUS_M, 0.0, 0.0))
        }
        (PartKind::ElbowJoint, PortId::Bottom) => {
            Some(Vec3::new(0.0, 0.0, -super::mirror::ELBOW_BEND_RADIUS_M))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_tables() {
        assert_eq!(ports_for(PartKind::PipeSegment).len(), 2);
        assert_eq!(ports_for(PartKind::ElbowJoint).len(), 2);
        assert!(ports_for(PartKind::TeeJoint).is_empty());

        assert_eq!(
            polarity_of(PartKind::PipeSegment, PortId::Left),
            Some(PortPolarity::Male)
        );
        assert_eq!(
            polarity_of(PartKind::ElbowJoint, PortId::Bottom),
            Some(PortPolarity::Female)
        );
        assert_eq!(polarity_of(PartKind::PipeSegment, PortId::Bottom), None);
    }

    #[test]
    fn test_pipe_port_positions_follow_length() {
        let left = local_port_position(PartKind::PipeSegment, PortId::Left, 2.0)
            .expect("Port erwartet");
        assert_eq!(left.x, -1.0);
        let right = local_port_position(PartKind::PipeSegment, PortId::Right, 2.0)
            .expect("Port erwartet");
        assert_eq!(right.x, 1.0);
    }

    #[test]
    fn test_wire_format_roundtrip() {
        for port in [PortId::Left, PortId::Right, PortId::Bottom] {
            assert_eq!(PortId::from_str(port.as_str()), Some(port));
        }
        assert_eq!(PortId::from_str("top"), None);
    }
}
