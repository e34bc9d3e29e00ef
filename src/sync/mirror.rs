//! 3D-Mirror-Knoten und Grafik-Ressourcen-Verwaltung.
//!
//! Jede Geometrie- und Material-Allokation läuft über den zählenden
//! `ResourcePool`. Ein Mirror, der entfernt wird, muss alle Handles
//! freigeben; ein Leck ist ein Korrektheitsfehler, kein
//! Optimierungsthema. Doppeltes Freigeben ist ein No-op.

use std::collections::HashSet;

use glam::{Vec2, Vec3};

use super::transform;
use crate::core::{Component, PartKind};

/// Bogenradius des Winkelverbinders in Metern (75 mm).
pub const ELBOW_BEND_RADIUS_M: f32 = 0.075;
/// Muffen-Tiefe der Fittings in Metern (30 mm).
pub const ELBOW_SOCKET_DEPTH_M: f32 = 0.03;
/// Gewinde-Länge an den Rohrenden in Metern (5 cm).
pub const PIPE_THREAD_LENGTH_M: f32 = 0.05;

/// Handle auf eine Grafik-Ressource (Geometrie oder Material).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(u64);

/// Zählender Allokator für Grafik-Ressourcen.
///
/// Modelliert den GPU-Besitz auf Datenebene: `live_count()` muss nach
/// vollständigem Teardown wieder null sein.
#[derive(Debug, Default)]
pub struct ResourcePool {
    next: u64,
    live: HashSet<u64>,
}

impl ResourcePool {
    /// Erstellt einen leeren Pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allokiert eine Ressource und gibt ihr Handle zurück.
    pub fn alloc(&mut self) -> ResourceHandle {
        self.next += 1;
        self.live.insert(self.next);
        ResourceHandle(self.next)
    }

    /// Gibt eine Ressource frei; doppeltes Freigeben ist ein No-op.
    pub fn release(&mut self, handle: ResourceHandle) -> bool {
        self.live.remove(&handle.0)
    }

    /// Anzahl der aktuell lebenden Ressourcen.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Rolle eines Sub-Meshes innerhalb eines Mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMeshRole {
    /// Abschlussring am Rohrende
    EndCap,
    /// Gewindehülse nahe dem Rohrende
    ThreadSleeve,
    /// Fitting-Muffe
    Socket,
}

/// Sub-Mesh eines Mirrors; Offsets sind relativ zur absoluten Länge
/// positioniert, daher wird bei Längenänderung destruktiv neu gebaut.
#[derive(Debug, Clone)]
pub struct SubMesh {
    /// Rolle des Sub-Meshes
    pub role: SubMeshRole,
    /// Lokaler Offset vom Mirror-Ursprung (Meter)
    pub offset: Vec3,
    /// Geometrie-Handle
    pub geometry: ResourceHandle,
}

/// Typ-spezifischer Mirror-Körper.
#[derive(Debug, Clone)]
pub enum MirrorShape {
    /// Hohlzylinder mit Länge in Metern
    Pipe { length_m: f32 },
    /// 90°-Bogen mit festem Radius
    Elbow { bend_radius_m: f32 },
}

/// 3D-Gegenstück einer 2D-Komponente, über die ID gekoppelt.
#[derive(Debug)]
pub struct Mirror {
    /// ID der gespiegelten Komponente
    pub component_id: u64,
    /// Katalogtyp
    pub kind: PartKind,
    /// Weltposition (Meter)
    pub position: Vec3,
    /// Rotation um die y-Achse (Radiant)
    pub rotation_y: f32,
    /// Typ-spezifischer Körper
    pub shape: MirrorShape,
    geometry: ResourceHandle,
    material: ResourceHandle,
    sub_meshes: Vec<SubMesh>,
    disposed: bool,
}

impl Mirror {
    /// Baut den Mirror einer Komponente; `None` für Typen ohne
    /// 3D-Implementierung.
    pub fn for_component(component: &Component, pool: &mut ResourcePool) -> Option<Mirror> {
        if !component.kind.has_mirror() {
            return None;
        }
        let position = transform::to_world_position(component.position);
        let rotation_y = transform::to_world_rotation(component.rotation_deg);

        let mut mirror = match component.kind {
            PartKind::PipeSegment => {
                let length_m = transform::length_to_meters(component.length_cm.unwrap_or(100));
                Mirror {
                    component_id: component.id,
                    kind: component.kind,
                    position,
                    rotation_y,
                    shape: MirrorShape::Pipe { length_m },
                    geometry: pool.alloc(),
                    material: pool.alloc(),
                    sub_meshes: Vec::new(),
                    disposed: false,
                }
            }
            PartKind::ElbowJoint => Mirror {
                component_id: component.id,
                kind: component.kind,
                position,
                rotation_y,
                shape: MirrorShape::Elbow {
                    bend_radius_m: ELBOW_BEND_RADIUS_M,
                },
                geometry: pool.alloc(),
                material: pool.alloc(),
                sub_meshes: Vec::new(),
                disposed: false,
            },
            _ => unreachable!("has_mirror() deckt nur Pipe und Elbow ab"),
        };

        mirror.build_sub_meshes(pool);
        Some(mirror)
    }

    /// Baut Endkappen/Gewinde bzw. Muffen an absoluten Offsets auf.
    fn build_sub_meshes(&mut self, pool: &mut ResourcePool) {
        match self.shape {
            MirrorShape::Pipe { length_m } => {
                let half = length_m / 2.0;
                let thread_offset = half - PIPE_THREAD_LENGTH_M / 2.0;
                for x in [-half, half] {
                    self.sub_meshes.push(SubMesh {
                        role: SubMeshRole::EndCap,
                        offset: Vec3::new(x, 0.0, 0.0),
                        geometry: pool.alloc(),
                    });
                }
                for x in [-thread_offset, thread_offset] {
                    self.sub_meshes.push(SubMesh {
                        role: SubMeshRole::ThreadSleeve,
                        offset: Vec3::new(x, 0.0, 0.0),
                        geometry: pool.alloc(),
                    });
                }
            }
            MirrorShape::Elbow { bend_radius_m } => {
                let socket_offset = bend_radius_m + ELBOW_SOCKET_DEPTH_M / 2.0;
                self.sub_meshes.push(SubMesh {
                    role: SubMeshRole::Socket,
                    offset: Vec3::new(-socket_offset, 0.0, 0.0),
                    geometry: pool.alloc(),
                });
                self.sub_meshes.push(SubMesh {
                    role: SubMeshRole::Socket,
                    offset: Vec3::new(0.0, 0.0, -socket_offset),
                    geometry: pool.alloc(),
                });
            }
        }
    }

    /// Übernimmt Transform-Änderungen aus der 2D-Komponente.
    pub fn update_transform(&mut self, canvas_pos: Vec2, rotation_deg: i32) {
        let world = transform::to_world_position(canvas_pos);
        // y bleibt erhalten (kann durch Animation abweichen)
        self.position.x = world.x;
        self.position.z = world.z;
        self.rotation_y = transform::to_world_rotation(rotation_deg);
    }

    /// Destruktiver Geometrie-Neubau bei Längenänderung.
    ///
    /// Kein Skalierungs-Transform: Endkappen und Gewindehülsen sitzen an
    /// absoluten Offsets, daher alte Geometrie freigeben und neu bauen.
    pub fn rebuild_length(&mut self, length_m: f32, pool: &mut ResourcePool) {
        let MirrorShape::Pipe { length_m: current } = self.shape else {
            return;
        };
        if (current - length_m).abs() < f32::EPSILON {
            return;
        }

        pool.release(self.geometry);
        for sub in self.sub_meshes.drain(..) {
            pool.release(sub.geometry);
        }

        self.shape = MirrorShape::Pipe { length_m };
        self.geometry = pool.alloc();
        self.build_sub_meshes(pool);
    }

    /// Aktuelle Rohrlänge in Metern (nur Pipe-Mirrors).
    pub fn pipe_length_m(&self) -> f32 {
        match self.shape {
            MirrorShape::Pipe { length_m } => length_m,
            MirrorShape::Elbow { .. } => 0.0,
        }
    }

    /// Sub-Meshes (read-only, für Renderer-Sinks).
    pub fn sub_meshes(&self) -> &[SubMesh] {
        &self.sub_meshes
    }

    /// Weltposition eines Ports (lokaler Offset rotiert um y).
    pub fn port_world_position(&self, port: super::ports::PortId) -> Option<Vec3> {
        let local = super::ports::local_port_position(self.kind, port, self.pipe_length_m())?;
        let (sin, cos) = self.rotation_y.sin_cos();
        let rotated = Vec3::new(
            local.x * cos + local.z * sin,
            local.y,
            -local.x * sin + local.z * cos,
        );
        Some(self.position + rotated)
    }

    /// Gibt alle Grafik-Ressourcen frei und löst den Mirror vom
    /// Szenengraphen. Mehrfachaufruf ist ein No-op.
    pub fn dispose(&mut self, pool: &mut ResourcePool) {
        if self.disposed {
            return;
        }
        pool.release(self.geometry);
        pool.release(self.material);
        for sub in self.sub_meshes.drain(..) {
            pool.release(sub.geometry);
        }
        self.disposed = true;
    }

    /// Ob der Mirror bereits freigegeben wurde.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pipe_component(id: u64, length_cm: u32) -> Component {
        let mut c = Component::new(id, PartKind::PipeSegment, Vec2::new(400.0, 300.0));
        c.set_length(length_cm as f64);
        c
    }

    #[test]
    fn test_pipe_mirror_has_caps_and_threads() {
        let mut pool = ResourcePool::new();
        let mirror = Mirror::for_component(&pipe_component(1, 200), &mut pool)
            .expect("Pipe hat Mirror");

        assert_eq!(mirror.sub_meshes().len(), 4);
        assert_abs_diff_eq!(mirror.pipe_length_m(), 2.0);
        // Körper-Geometrie + Material + 4 Sub-Meshes
        assert_eq!(pool.live_count(), 6);
    }

    #[test]
    fn test_no_mirror_for_unsupported_kinds() {
        let mut pool = ResourcePool::new();
        let tee = Component::new(1, PartKind::TeeJoint, Vec2::ZERO);
        assert!(Mirror::for_component(&tee, &mut pool).is_none());
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_length_rebuild_is_destructive_and_balanced() {
        let mut pool = ResourcePool::new();
        let mut mirror = Mirror::for_component(&pipe_component(1, 100), &mut pool)
            .expect("Pipe hat Mirror");
        let before = pool.live_count();

        mirror.rebuild_length(2.5, &mut pool);

        assert_abs_diff_eq!(mirror.pipe_length_m(), 2.5);
        assert_eq!(pool.live_count(), before);
        // Endkappen sitzen jetzt bei ±1.25 m
        let caps: Vec<f32> = mirror
            .sub_meshes()
            .iter()
            .filter(|s| s.role == SubMeshRole::EndCap)
            .map(|s| s.offset.x)
            .collect();
        assert!(caps.contains(&1.25) && caps.contains(&-1.25));
    }

    #[test]
    fn test_dispose_releases_everything_and_is_idempotent() {
        let mut pool = ResourcePool::new();
        let mut mirror = Mirror::for_component(&pipe_component(1, 100), &mut pool)
            .expect("Pipe hat Mirror");
        assert!(pool.live_count() > 0);

        mirror.dispose(&mut pool);
        assert_eq!(pool.live_count(), 0);

        // Doppel-Dispose darf nicht knallen und nichts ändern
        mirror.dispose(&mut pool);
        assert_eq!(pool.live_count(), 0);
        assert!(mirror.is_disposed());
    }

    #[test]
    fn test_port_world_position_rotates() {
        let mut pool = ResourcePool::new();
        let mut component = pipe_component(1, 200);
        component.rotate(90);
        let mirror =
            Mirror::for_component(&component, &mut pool).expect("Pipe hat Mirror");

        // Bei 90° Rotation zeigt das rechte Rohrende in -z-Richtung
        let right = mirror
            .port_world_position(super::super::ports::PortId::Right)
            .expect("Port erwartet");
        assert_abs_diff_eq!(right.x, mirror.position.x, epsilon = 1e-6);
        assert_abs_diff_eq!(right.z, mirror.position.z - 1.0, epsilon = 1e-6);
    }
}
