//! Stücklisten-Aggregation: reine Funktion über den Szeneninhalt.

use std::collections::BTreeMap;

use super::catalog::PartKind;
use super::scene::Scene;

/// Grobe Massen für die Gewichtsschätzung (kein Statik-Nachweis).
const PIPE_KG_PER_M: f64 = 3.5;
const ELBOW_KG: f64 = 0.25;
const TEE_KG: f64 = 0.35;
const WALL_MOUNT_KG: f64 = 0.4;

/// Abgeleitete Stückliste; nie direkt mutiert, immer neu berechnet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BomReport {
    /// Rohrsegmente gruppiert nach Länge (cm → Stückzahl, aufsteigend)
    pub pipe_groups: BTreeMap<u32, u32>,
    /// Anzahl Winkelverbinder
    pub elbow_count: u32,
    /// Anzahl T-Stücke
    pub tee_count: u32,
    /// Anzahl Wandhalter
    pub wall_mount_count: u32,
}

impl BomReport {
    /// Gesamtzahl aller Positionen.
    pub fn total_items(&self) -> u32 {
        self.pipe_groups.values().sum::<u32>()
            + self.elbow_count
            + self.tee_count
            + self.wall_mount_count
    }

    /// Grobe Gewichtsschätzung in Kilogramm (Dichte-Überschlag,
    /// ausdrücklich keine Traglast-Berechnung).
    pub fn estimated_weight_kg(&self) -> f64 {
        let pipes: f64 = self
            .pipe_groups
            .iter()
            .map(|(&len_cm, &count)| len_cm as f64 / 100.0 * PIPE_KG_PER_M * count as f64)
            .sum();
        pipes
            + self.elbow_count as f64 * ELBOW_KG
            + self.tee_count as f64 * TEE_KG
            + self.wall_mount_count as f64 * WALL_MOUNT_KG
    }
}

/// Berechnet die Stückliste aus der Szene.
///
/// Rein und idempotent: liest ausschließlich Komponenten-Daten, kein
/// Rendering-Zustand. Wird nach jeder Szenen-Mutation neu aufgerufen.
pub fn compute_bom(scene: &Scene) -> BomReport {
    let mut report = BomReport::default();

    for component in scene.iter() {
        match component.kind {
            PartKind::PipeSegment => {
                let length = component.length_cm.unwrap_or(100);
                *report.pipe_groups.entry(length).or_insert(0) += 1;
            }
            PartKind::ElbowJoint => report.elbow_count += 1,
            PartKind::TeeJoint => report.tee_count += 1,
            PartKind::WallMount => report.wall_mount_count += 1,
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_pipe_and_elbow_scenario() {
        let mut scene = Scene::new();
        let pipe = scene.spawn(PartKind::PipeSegment, Vec2::new(100.0, 100.0));
        scene
            .find_mut(pipe)
            .expect("Rohr erwartet")
            .set_length(150.0);
        scene.spawn(PartKind::ElbowJoint, Vec2::new(300.0, 100.0));

        let report = compute_bom(&scene);
        assert_eq!(report.pipe_groups, BTreeMap::from([(150, 1)]));
        assert_eq!(report.elbow_count, 1);
        assert_eq!(report.tee_count, 0);
        assert_eq!(report.wall_mount_count, 0);
    }

    #[test]
    fn test_equal_lengths_group_together() {
        let mut scene = Scene::new();
        scene.spawn(PartKind::PipeSegment, Vec2::ZERO);
        scene.spawn(PartKind::PipeSegment, Vec2::new(0.0, 40.0));

        let report = compute_bom(&scene);
        assert_eq!(report.pipe_groups, BTreeMap::from([(100, 2)]));
    }

    #[test]
    fn test_groups_sorted_ascending() {
        let mut scene = Scene::new();
        for len in [250.0, 50.0, 150.0] {
            let id = scene.spawn(PartKind::PipeSegment, Vec2::ZERO);
            scene.find_mut(id).expect("Rohr erwartet").set_length(len);
        }

        let report = compute_bom(&scene);
        let lengths: Vec<u32> = report.pipe_groups.keys().copied().collect();
        assert_eq!(lengths, vec![50, 150, 250]);
    }

    #[test]
    fn test_idempotent_without_mutation() {
        let mut scene = Scene::new();
        scene.spawn(PartKind::TeeJoint, Vec2::ZERO);
        scene.spawn(PartKind::WallMount, Vec2::ZERO);

        let first = compute_bom(&scene);
        let second = compute_bom(&scene);
        assert_eq!(first, second);
    }

    #[test]
    fn test_weight_estimate() {
        let mut scene = Scene::new();
        let pipe = scene.spawn(PartKind::PipeSegment, Vec2::ZERO);
        scene
            .find_mut(pipe)
            .expect("Rohr erwartet")
            .set_length(200.0);
        scene.spawn(PartKind::ElbowJoint, Vec2::ZERO);

        let report = compute_bom(&scene);
        // 2 m Rohr à 3.5 kg/m + 1 Winkel à 0.25 kg
        assert!((report.estimated_weight_kg() - 7.25).abs() < 1e-9);
        assert_eq!(report.total_items(), 2);
    }
}
