//! Raster-Snap und Nachbar-Ausrichtung über Footprint-Kanten.
//!
//! Bounding-Boxen kommen aus der Katalog-Geometrietabelle, nicht aus
//! gemessenen Render-Elementen; der Snap-Engine braucht kein Backend.

use glam::Vec2;

use super::scene::Scene;

/// Achse einer Ausrichtungshilfslinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAxis {
    /// Senkrechte Linie bei `coord` = x
    Vertical,
    /// Waagerechte Linie bei `coord` = y
    Horizontal,
}

/// Transiente Hilfslinie; wird bei jedem Drag-Tick neu aufgebaut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    /// Achse der Linie
    pub axis: GuideAxis,
    /// Koordinate auf der jeweiligen Achse
    pub coord: f32,
}

/// Quantisiert eine Position auf das Raster: `round(v / grid) * grid`.
pub fn grid_snap(pos: Vec2, grid_size: f32) -> Vec2 {
    Vec2::new(
        (pos.x / grid_size).round() * grid_size,
        (pos.y / grid_size).round() * grid_size,
    )
}

/// Sammelt Hilfslinien für die gerade gezogene Komponente.
///
/// Pro Achse werden nur gleichartige Kantenpaare verglichen
/// (links-links, rechts-rechts bzw. oben-oben, unten-unten).
/// Die Linien sind rein advisorisch; sie verschieben nichts.
pub fn alignment_guides(scene: &Scene, dragged_id: u64, snap_distance: f32) -> Vec<Guide> {
    let Some(dragged) = scene.find(dragged_id) else {
        return Vec::new();
    };
    let d_size = dragged.footprint();
    let mut guides = Vec::new();

    for other in scene.iter().filter(|c| c.id != dragged_id) {
        let o_size = other.footprint();

        if (dragged.position.x - other.position.x).abs() < snap_distance {
            guides.push(Guide {
                axis: GuideAxis::Vertical,
                coord: other.position.x,
            });
        }
        let d_right = dragged.position.x + d_size.x;
        let o_right = other.position.x + o_size.x;
        if (d_right - o_right).abs() < snap_distance {
            guides.push(Guide {
                axis: GuideAxis::Vertical,
                coord: o_right,
            });
        }

        if (dragged.position.y - other.position.y).abs() < snap_distance {
            guides.push(Guide {
                axis: GuideAxis::Horizontal,
                coord: other.position.y,
            });
        }
        let d_bottom = dragged.position.y + d_size.y;
        let o_bottom = other.position.y + o_size.y;
        if (d_bottom - o_bottom).abs() < snap_distance {
            guides.push(Guide {
                axis: GuideAxis::Horizontal,
                coord: o_bottom,
            });
        }
    }

    guides
}

/// Rastet die gezogene Komponente auf Nachbarkanten ein.
///
/// x rastet auf die linke oder rechte Kante eines Nachbarn, y analog
/// auf obere/untere Kante, jeweils innerhalb von `snap_distance`.
/// Bei mehreren Kandidaten gewinnt pro Achse die nächstliegende Kante
/// (bewusste Verbesserung gegenüber "letzter Treffer gewinnt").
///
/// Gibt immer eine Position zurück; ohne Treffer die unveränderte.
pub fn snap_to_guides(scene: &Scene, dragged_id: u64, snap_distance: f32) -> Vec2 {
    let Some(dragged) = scene.find(dragged_id) else {
        return Vec2::ZERO;
    };

    let mut snapped = dragged.position;
    let mut best_dx = snap_distance;
    let mut best_dy = snap_distance;

    for other in scene.iter().filter(|c| c.id != dragged_id) {
        let o_size = other.footprint();
        let edges_x = [other.position.x, other.position.x + o_size.x];
        let edges_y = [other.position.y, other.position.y + o_size.y];

        for edge in edges_x {
            let dist = (dragged.position.x - edge).abs();
            if dist < best_dx {
                best_dx = dist;
                snapped.x = edge;
            }
        }
        for edge in edges_y {
            let dist = (dragged.position.y - edge).abs();
            if dist < best_dy {
                best_dy = dist;
                snapped.y = edge;
            }
        }
    }

    snapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PartKind;

    fn scene_with(positions: &[(PartKind, f32, f32)]) -> (Scene, Vec<u64>) {
        let mut scene = Scene::new();
        let ids = positions
            .iter()
            .map(|&(kind, x, y)| scene.spawn(kind, Vec2::new(x, y)))
            .collect();
        (scene, ids)
    }

    #[test]
    fn test_grid_snap_quantizes() {
        assert_eq!(grid_snap(Vec2::new(33.0, 47.0), 20.0), Vec2::new(40.0, 40.0));
        assert_eq!(grid_snap(Vec2::new(-7.0, 9.0), 20.0), Vec2::new(0.0, 20.0));
    }

    #[test]
    fn test_snap_to_right_edge_of_sibling() {
        // Wandhalter bei (100, 100), Footprint 30×30 → rechte Kante x=130.
        // Gezogener Winkel bei (136, 300): innerhalb 10 Einheiten der Kante.
        let (mut scene, ids) = scene_with(&[(PartKind::WallMount, 100.0, 100.0)]);
        let dragged = scene.spawn(PartKind::ElbowJoint, Vec2::new(136.0, 300.0));
        let _ = ids;

        let snapped = snap_to_guides(&scene, dragged, 10.0);
        assert_eq!(snapped.x, 130.0);
        // y: keine Kante in Reichweite → unverändert
        assert_eq!(snapped.y, 300.0);
    }

    #[test]
    fn test_snap_prefers_closest_edge() {
        // Zwei Kandidaten: linke Kante bei 100 (Abstand 4) und bei 109 (Abstand 5).
        let (mut scene, _) = scene_with(&[
            (PartKind::WallMount, 100.0, 500.0),
            (PartKind::WallMount, 109.0, 700.0),
        ]);
        let dragged = scene.spawn(PartKind::ElbowJoint, Vec2::new(104.0, 900.0));

        let snapped = snap_to_guides(&scene, dragged, 10.0);
        assert_eq!(snapped.x, 100.0);
    }

    #[test]
    fn test_no_snap_outside_distance() {
        let (mut scene, _) = scene_with(&[(PartKind::WallMount, 100.0, 100.0)]);
        let dragged = scene.spawn(PartKind::ElbowJoint, Vec2::new(400.0, 400.0));

        let snapped = snap_to_guides(&scene, dragged, 10.0);
        assert_eq!(snapped, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_guides_per_axis_edge_pairs() {
        // Gleiche linke Kante und gleiche obere Kante → zwei Hilfslinien.
        let (mut scene, _) = scene_with(&[(PartKind::ElbowJoint, 200.0, 200.0)]);
        let dragged = scene.spawn(PartKind::ElbowJoint, Vec2::new(205.0, 204.0));

        let guides = alignment_guides(&scene, dragged, 10.0);
        assert!(guides.contains(&Guide {
            axis: GuideAxis::Vertical,
            coord: 200.0
        }));
        assert!(guides.contains(&Guide {
            axis: GuideAxis::Horizontal,
            coord: 200.0
        }));
        // Footprints identisch → auch rechte/untere Kanten fluchten
        assert_eq!(guides.len(), 4);
    }

    #[test]
    fn test_missing_dragged_id_yields_no_guides() {
        let (scene, _) = scene_with(&[(PartKind::WallMount, 0.0, 0.0)]);
        assert!(alignment_guides(&scene, 999, 10.0).is_empty());
    }
}
