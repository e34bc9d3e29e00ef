//! Flaches JSON-Format für Design-Dateien.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{compute_bom, PartKind, Scene};
use crate::sync::{PortConnection, PortId};

/// Eine Komponente im Wire-Format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Katalog-ID, z.B. "pipe-segment"
    #[serde(rename = "type")]
    pub type_id: String,
    pub x: f32,
    pub y: f32,
    pub rotation: i32,
    /// Rohrlänge in cm, nur für Rohrsegmente
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

/// Stücklisten-Eintrag: Fittings als Zählwert, Rohre als Länge→Anzahl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BomEntry {
    /// Rohrsegmente, gruppiert nach Länge in cm
    Lengths(BTreeMap<String, u32>),
    /// Einfacher Zählwert
    Count(u32),
}

/// Verbindung im Wire-Format; Komponenten werden über ihren Index
/// in der `components`-Liste referenziert (IDs sind sessionlokal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub comp1: usize,
    pub port1: String,
    pub comp2: usize,
    pub port2: String,
}

/// Wurzelstruktur einer Design-Datei.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub components: Vec<ComponentRecord>,
    /// Abgeleitete Stückliste; beim Import ignoriert und neu berechnet
    pub bom: BTreeMap<String, BomEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<ConnectionRecord>,
}

impl DesignFile {
    /// Baut das Wire-Format aus Szene und Verbindungsliste.
    pub fn from_scene(scene: &Scene, connections: &[PortConnection]) -> Self {
        let components: Vec<ComponentRecord> = scene
            .iter()
            .map(|c| ComponentRecord {
                type_id: c.kind.id().to_string(),
                x: c.position.x,
                y: c.position.y,
                rotation: c.rotation_deg,
                length: c.length_cm,
            })
            .collect();

        let report = compute_bom(scene);
        let mut bom = BTreeMap::new();
        if !report.pipe_groups.is_empty() {
            let groups: BTreeMap<String, u32> = report
                .pipe_groups
                .iter()
                .map(|(&len, &count)| (len.to_string(), count))
                .collect();
            bom.insert(PartKind::PipeSegment.id().to_string(), BomEntry::Lengths(groups));
        }
        for (kind, count) in [
            (PartKind::ElbowJoint, report.elbow_count),
            (PartKind::TeeJoint, report.tee_count),
            (PartKind::WallMount, report.wall_mount_count),
        ] {
            if count > 0 {
                bom.insert(kind.id().to_string(), BomEntry::Count(count));
            }
        }

        // ID → Listenindex für die Verbindungs-Referenzen
        let index_of = |id: u64| scene.iter().position(|c| c.id == id);
        let connections = connections
            .iter()
            .filter_map(|c| {
                Some(ConnectionRecord {
                    comp1: index_of(c.comp1)?,
                    port1: c.port1.as_str().to_string(),
                    comp2: index_of(c.comp2)?,
                    port2: c.port2.as_str().to_string(),
                })
            })
            .collect();

        DesignFile {
            components,
            bom,
            connections,
        }
    }

    /// Rekonstruiert Szene und Verbindungen.
    ///
    /// Unbekannte Typ-IDs und ungültige Verbindungs-Indizes werden mit
    /// Warnung übersprungen; Länge und Rotation laufen durch die
    /// üblichen Clamps der Entity-Setter.
    pub fn into_scene(self) -> (Scene, Vec<PortConnection>) {
        let mut scene = Scene::new();
        // Wire-Index → neue Komponenten-ID (None für übersprungene Einträge)
        let mut ids: Vec<Option<u64>> = Vec::with_capacity(self.components.len());

        for record in &self.components {
            let Some(kind) = PartKind::from_id(&record.type_id) else {
                log::warn!("Import: unbekannter Typ '{}' uebersprungen", record.type_id);
                ids.push(None);
                continue;
            };
            let id = scene.spawn(kind, Vec2::new(record.x, record.y));
            if let Some(component) = scene.find_mut(id) {
                component.set_rotation(record.rotation);
                if let Some(cm) = record.length {
                    component.set_length(cm as f64);
                }
            }
            ids.push(Some(id));
        }

        let resolve = |index: usize| ids.get(index).copied().flatten();
        let connections = self
            .connections
            .iter()
            .filter_map(|record| {
                let connection = PortConnection {
                    comp1: resolve(record.comp1)?,
                    port1: PortId::from_str(&record.port1)?,
                    comp2: resolve(record.comp2)?,
                    port2: PortId::from_str(&record.port2)?,
                };
                Some(connection)
            })
            .collect();

        (scene, connections)
    }
}

/// Serialisiert die Szene als eingerücktes JSON.
pub fn export_design(scene: &Scene, connections: &[PortConnection]) -> Result<String> {
    let file = DesignFile::from_scene(scene, connections);
    serde_json::to_string_pretty(&file).context("Design-Export fehlgeschlagen")
}

/// Parst eine Design-Datei aus JSON-Text.
pub fn parse_design(text: &str) -> Result<DesignFile> {
    serde_json::from_str(text).context("Design-Datei ist kein gueltiges JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        let pipe = scene.spawn(PartKind::PipeSegment, Vec2::new(100.0, 100.0));
        scene.find_mut(pipe).expect("Rohr erwartet").set_length(150.0);
        scene.spawn(PartKind::ElbowJoint, Vec2::new(300.0, 100.0));
        scene.spawn(PartKind::WallMount, Vec2::new(50.0, 50.0));
        scene
    }

    #[test]
    fn test_export_bom_shape() {
        let scene = sample_scene();
        let file = DesignFile::from_scene(&scene, &[]);

        assert_eq!(file.components.len(), 3);
        assert_eq!(
            file.bom.get("pipe-segment"),
            Some(&BomEntry::Lengths(BTreeMap::from([("150".to_string(), 1)])))
        );
        assert_eq!(file.bom.get("elbow-joint"), Some(&BomEntry::Count(1)));
        assert_eq!(file.bom.get("tee-joint"), None);
    }

    #[test]
    fn test_roundtrip_preserves_tuples() {
        let scene = sample_scene();
        let json = export_design(&scene, &[]).expect("Export erwartet");
        let (restored, _) = parse_design(&json).expect("Parse erwartet").into_scene();

        let tuples = |s: &Scene| {
            let mut v: Vec<_> = s
                .iter()
                .map(|c| {
                    (
                        c.kind.id(),
                        c.position.x.to_bits(),
                        c.position.y.to_bits(),
                        c.rotation_deg,
                        c.length_cm,
                    )
                })
                .collect();
            v.sort();
            v
        };
        assert_eq!(tuples(&scene), tuples(&restored));
    }

    #[test]
    fn test_connections_roundtrip_via_indices() {
        let scene = sample_scene();
        let pipe_id = scene.iter().next().expect("Komponente erwartet").id;
        let elbow_id = scene.iter().nth(1).expect("Komponente erwartet").id;
        let connections = [PortConnection {
            comp1: pipe_id,
            port1: PortId::Right,
            comp2: elbow_id,
            port2: PortId::Left,
        }];

        let json = export_design(&scene, &connections).expect("Export erwartet");
        let (restored, restored_connections) =
            parse_design(&json).expect("Parse erwartet").into_scene();

        assert_eq!(restored_connections.len(), 1);
        let c = restored_connections[0];
        assert_eq!(c.port1, PortId::Right);
        assert_eq!(c.port2, PortId::Left);
        assert_eq!(
            restored.find(c.comp1).expect("Komponente erwartet").kind,
            PartKind::PipeSegment
        );
        assert_eq!(
            restored.find(c.comp2).expect("Komponente erwartet").kind,
            PartKind::ElbowJoint
        );
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        let json = r#"{
            "components": [
                {"type": "flux-capacitor", "x": 0, "y": 0, "rotation": 0},
                {"type": "wall-mount", "x": 10, "y": 20, "rotation": 90}
            ],
            "bom": {}
        }"#;
        let (scene, _) = parse_design(json).expect("Parse erwartet").into_scene();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.iter().next().expect("Komponente erwartet").kind, PartKind::WallMount);
    }

    #[test]
    fn test_import_clamps_length_and_rotation() {
        let json = r#"{
            "components": [
                {"type": "pipe-segment", "x": 0, "y": 0, "rotation": 450, "length": 9999}
            ],
            "bom": {}
        }"#;
        let (scene, _) = parse_design(json).expect("Parse erwartet").into_scene();
        let pipe = scene.iter().next().expect("Komponente erwartet");
        assert_eq!(pipe.rotation_deg, 90);
        assert_eq!(pipe.length_cm, Some(300));
    }

    #[test]
    fn test_out_of_range_connection_index_is_dropped() {
        let json = r#"{
            "components": [
                {"type": "pipe-segment", "x": 0, "y": 0, "rotation": 0, "length": 100}
            ],
            "bom": {},
            "connections": [
                {"comp1": 0, "port1": "right", "comp2": 7, "port2": "left"}
            ]
        }"#;
        let (_, connections) = parse_design(json).expect("Parse erwartet").into_scene();
        assert!(connections.is_empty());
    }
}
