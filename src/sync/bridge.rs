//! Die Sync-Bridge: alleinige Eigentümerin der 2D↔3D-Zuordnung.
//!
//! Weder hält die Szene Referenzen auf Mirrors noch umgekehrt; die
//! Bridge verwaltet die bidirektionale Zuordnung über die Komponenten-ID.
//! Der 3D-Szenengraph (Pool + Mirrors) gehört exklusiv der Bridge.

use std::collections::HashSet;

use glam::{Vec2, Vec3};
use indexmap::IndexMap;

use super::animation::{Animator, TweenTarget};
use super::mirror::{Mirror, ResourcePool};
use super::ports::{polarity_of, PortConnection, PortId, PortPolarity};
use super::transform::{self, MIRROR_HEIGHT_Y};
use crate::core::{PartKind, Scene};

/// Dauer der Absenk-Animation neu erstellter Mirrors (Sekunden).
const SPAWN_DROP_DURATION_S: f32 = 0.6;
/// Start-Überhöhung neu erstellter Mirrors (Meter).
const SPAWN_DROP_OFFSET_M: f32 = 1.0;

/// Aus dem 3D-Viewer stammende Bearbeitung, umgerechnet in
/// 2D-Koordinaten. Wird über die Command-Pipeline auf die Szene
/// angewendet, nie direkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorEdit {
    /// Betroffene Komponente
    pub component_id: u64,
    /// Neue 2D-Position
    pub position: Vec2,
    /// Neue 2D-Rotation in Grad, normalisiert
    pub rotation_deg: i32,
}

/// Hält pro Szenen-Komponente einen 3D-Mirror in Gleichschritt.
#[derive(Default)]
pub struct SyncBridge {
    /// ID → Mirror, Einfügereihenfolge deterministisch
    mirrors: IndexMap<u64, Mirror>,
    connections: Vec<PortConnection>,
    pool: ResourcePool,
    animator: Animator,
    /// Reentrancy-Gate: eine laufende Sync-Richtung triggert nie die Gegenrichtung
    sync_in_progress: bool,
    /// Typen, für die bereits einmal "kein Mirror" gewarnt wurde
    warned_kinds: HashSet<PartKind>,
}

impl SyncBridge {
    /// Erstellt eine leere Bridge.
    pub fn new() -> Self {
        Self::default()
    }

    /// 2D→3D-Vollabgleich mit der Szene.
    ///
    /// Entfernt Mirrors verschwundener Komponenten (inkl. Disposal),
    /// aktualisiert Transformen bestehender Mirrors (Rohrlängen werden
    /// destruktiv neu gebaut) und erstellt fehlende Mirrors.
    pub fn sync_from_2d(&mut self, scene: &Scene) {
        if self.sync_in_progress {
            // Die Änderung stammt aus der 3D-Richtung; der Mirror ist
            // bereits aktuell. Kein Ping-Pong.
            return;
        }
        self.sync_in_progress = true;

        // Verwaiste Mirrors entfernen
        let stale: Vec<u64> = self
            .mirrors
            .keys()
            .copied()
            .filter(|id| !scene.contains(*id))
            .collect();
        for id in stale {
            self.remove_mirror(id);
        }

        for component in scene.iter() {
            if let Some(mirror) = self.mirrors.get_mut(&component.id) {
                mirror.update_transform(component.position, component.rotation_deg);
                if let Some(cm) = component.length_cm {
                    mirror.rebuild_length(transform::length_to_meters(cm), &mut self.pool);
                }
            } else if let Some(mirror) = Mirror::for_component(component, &mut self.pool) {
                self.animator.start(
                    component.id,
                    TweenTarget::Height,
                    MIRROR_HEIGHT_Y + SPAWN_DROP_OFFSET_M,
                    MIRROR_HEIGHT_Y,
                    SPAWN_DROP_DURATION_S,
                );
                self.mirrors.insert(component.id, mirror);
            } else if self.warned_kinds.insert(component.kind) {
                log::warn!(
                    "Keine 3D-Implementierung fuer {:?}; Komponente bleibt 2D-only",
                    component.kind
                );
            }
        }

        self.sync_in_progress = false;
    }

    /// 3D→2D: rechnet eine Mirror-Verschiebung in einen `MirrorEdit` um.
    ///
    /// Setzt das Reentrancy-Gate; der Aufrufer wendet den Edit über die
    /// Command-Pipeline an und beendet die Bearbeitung mit
    /// [`finish_mirror_edit`](Self::finish_mirror_edit).
    /// `None`, wenn kein Mirror zu dieser ID existiert (erwartetes
    /// Rennen zwischen UI-Event und Löschung).
    pub fn begin_mirror_edit(
        &mut self,
        component_id: u64,
        world_pos: Vec3,
        rotation_y: f32,
    ) -> Option<MirrorEdit> {
        let mirror = self.mirrors.get_mut(&component_id)?;
        mirror.position.x = world_pos.x;
        mirror.position.z = world_pos.z;
        mirror.rotation_y = rotation_y;

        self.sync_in_progress = true;
        Some(MirrorEdit {
            component_id,
            position: transform::to_canvas_position(world_pos),
            rotation_deg: transform::to_canvas_rotation(rotation_y),
        })
    }

    /// Beendet eine 3D-seitige Bearbeitung und öffnet das Gate wieder.
    pub fn finish_mirror_edit(&mut self) {
        self.sync_in_progress = false;
    }

    /// Verbindet zwei Ports; gültig nur male ↔ female.
    ///
    /// Fehlende Mirrors oder Ports sowie Polaritätskonflikte geben
    /// `false` zurück und lassen den Zustand unverändert.
    pub fn connect(&mut self, comp1: u64, port1: PortId, comp2: u64, port2: PortId) -> bool {
        let Some(kind1) = self.mirrors.get(&comp1).map(|m| m.kind) else {
            log::warn!("connect: Mirror {} fehlt", comp1);
            return false;
        };
        let Some(kind2) = self.mirrors.get(&comp2).map(|m| m.kind) else {
            log::warn!("connect: Mirror {} fehlt", comp2);
            return false;
        };
        let (Some(pol1), Some(pol2)) = (polarity_of(kind1, port1), polarity_of(kind2, port2))
        else {
            log::warn!("connect: unbekannter Port");
            return false;
        };
        let valid = matches!(
            (pol1, pol2),
            (PortPolarity::Male, PortPolarity::Female) | (PortPolarity::Female, PortPolarity::Male)
        );
        if !valid {
            log::warn!("connect: Polaritaet passt nicht ({:?} ↔ {:?})", pol1, pol2);
            return false;
        }

        let connection = PortConnection {
            comp1,
            port1,
            comp2,
            port2,
        };
        if self.connections.contains(&connection) {
            return false;
        }
        self.connections.push(connection);
        true
    }

    /// Löst die Verbindung an einem Port; `false` wenn keine existiert.
    pub fn disconnect(&mut self, comp: u64, port: PortId) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| {
            !((c.comp1 == comp && c.port1 == port) || (c.comp2 == comp && c.port2 == port))
        });
        before != self.connections.len()
    }

    /// Tickt laufende Animationen und wendet die Werte auf Mirrors an.
    pub fn tick_animations(&mut self, dt: f32) {
        for (id, target, value) in self.animator.tick(dt) {
            if let Some(mirror) = self.mirrors.get_mut(&id) {
                match target {
                    TweenTarget::Height => mirror.position.y = value,
                    TweenTarget::RotationY => mirror.rotation_y = value,
                }
            }
        }
    }

    /// Vollständiger Teardown (Clear-All / Szenen-Import).
    pub fn clear(&mut self) {
        let ids: Vec<u64> = self.mirrors.keys().copied().collect();
        for id in ids {
            self.remove_mirror(id);
        }
        self.connections.clear();
    }

    fn remove_mirror(&mut self, id: u64) {
        if let Some(mut mirror) = self.mirrors.shift_remove(&id) {
            mirror.dispose(&mut self.pool);
        }
        self.animator.cancel_all(id);
        self.connections
            .retain(|c| c.comp1 != id && c.comp2 != id);
    }

    /// Mirror einer Komponente, falls vorhanden.
    pub fn mirror(&self, id: u64) -> Option<&Mirror> {
        self.mirrors.get(&id)
    }

    /// Iteriert über alle Mirrors in Einfügereihenfolge.
    pub fn mirrors(&self) -> impl Iterator<Item = &Mirror> {
        self.mirrors.values()
    }

    /// Anzahl aktiver Mirrors.
    pub fn mirror_count(&self) -> usize {
        self.mirrors.len()
    }

    /// Alle advisorischen Port-Verbindungen.
    pub fn connections(&self) -> &[PortConnection] {
        &self.connections
    }

    /// Anzahl lebender Grafik-Ressourcen (Leak-Kontrolle in Tests).
    pub fn live_resources(&self) -> usize {
        self.pool.live_count()
    }

    /// Anzahl aktiver Animationen.
    pub fn active_animations(&self) -> usize {
        self.animator.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn scene_with_pipe_and_elbow() -> (Scene, u64, u64) {
        let mut scene = Scene::new();
        let pipe = scene.spawn(PartKind::PipeSegment, Vec2::new(100.0, 100.0));
        let elbow = scene.spawn(PartKind::ElbowJoint, Vec2::new(300.0, 100.0));
        (scene, pipe, elbow)
    }

    #[test]
    fn test_sync_creates_and_removes_mirrors() {
        let (mut scene, pipe, elbow) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();

        bridge.sync_from_2d(&scene);
        assert_eq!(bridge.mirror_count(), 2);
        assert!(bridge.mirror(pipe).is_some());
        assert!(bridge.mirror(elbow).is_some());

        scene.remove(pipe);
        bridge.sync_from_2d(&scene);
        assert_eq!(bridge.mirror_count(), 1);
        assert!(bridge.mirror(pipe).is_none());
    }

    #[test]
    fn test_add_remove_restores_resource_balance() {
        let (mut scene, _, _) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        let baseline = bridge.live_resources();

        let extra = scene.spawn(PartKind::PipeSegment, Vec2::new(500.0, 500.0));
        bridge.sync_from_2d(&scene);
        assert!(bridge.live_resources() > baseline);

        scene.remove(extra);
        bridge.sync_from_2d(&scene);
        assert_eq!(bridge.live_resources(), baseline);
    }

    #[test]
    fn test_unsupported_kinds_yield_no_mirror() {
        let mut scene = Scene::new();
        scene.spawn(PartKind::TeeJoint, Vec2::ZERO);
        scene.spawn(PartKind::WallMount, Vec2::ZERO);

        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        assert_eq!(bridge.mirror_count(), 0);
        assert_eq!(bridge.live_resources(), 0);
    }

    #[test]
    fn test_length_change_rebuilds_geometry() {
        let (mut scene, pipe, _) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        let baseline = bridge.live_resources();

        scene.find_mut(pipe).expect("Rohr erwartet").set_length(250.0);
        bridge.sync_from_2d(&scene);

        let mirror = bridge.mirror(pipe).expect("Mirror erwartet");
        assert!((mirror.pipe_length_m() - 2.5).abs() < 1e-6);
        // Neubau ist ressourcen-neutral
        assert_eq!(bridge.live_resources(), baseline);
    }

    #[test]
    fn test_connect_requires_male_female() {
        let (scene, pipe, elbow) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);

        // male (Rohr rechts) ↔ female (Winkel links): gültig
        assert!(bridge.connect(pipe, PortId::Right, elbow, PortId::Left));
        assert_eq!(bridge.connections().len(), 1);

        // male ↔ male: ungültig
        assert!(!bridge.connect(pipe, PortId::Left, pipe, PortId::Right));
        // Unbekannte IDs: no-op mit false
        assert!(!bridge.connect(999, PortId::Left, elbow, PortId::Bottom));
        assert_eq!(bridge.connections().len(), 1);
    }

    #[test]
    fn test_disconnect_and_removal_drop_connections() {
        let (mut scene, pipe, elbow) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        bridge.connect(pipe, PortId::Right, elbow, PortId::Left);

        assert!(bridge.disconnect(elbow, PortId::Left));
        assert!(!bridge.disconnect(elbow, PortId::Left));

        bridge.connect(pipe, PortId::Right, elbow, PortId::Left);
        scene.remove(elbow);
        bridge.sync_from_2d(&scene);
        assert!(bridge.connections().is_empty());
    }

    #[test]
    fn test_mirror_edit_roundtrip_and_gate() {
        let (scene, pipe, _) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);

        let edit = bridge
            .begin_mirror_edit(pipe, glam::Vec3::new(1.0, 0.5, -1.0), 0.0)
            .expect("Edit erwartet");
        assert_eq!(edit.position, Vec2::new(440.0, 260.0));

        // Gate geschlossen: sync_from_2d darf den Mirror nicht anfassen
        bridge.sync_from_2d(&scene);
        let mirror = bridge.mirror(pipe).expect("Mirror erwartet");
        assert!((mirror.position.x - 1.0).abs() < 1e-6);

        bridge.finish_mirror_edit();
        bridge.sync_from_2d(&scene);
        // Jetzt gewinnt wieder die Szene (Komponente steht bei (100, 100))
        let mirror = bridge.mirror(pipe).expect("Mirror erwartet");
        assert!((mirror.position.x - (-7.5)).abs() < 1e-6);
    }

    #[test]
    fn test_edit_for_deleted_component_is_none() {
        let (scene, _, _) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        assert!(bridge
            .begin_mirror_edit(999, glam::Vec3::ZERO, 0.0)
            .is_none());
    }

    #[test]
    fn test_spawn_animation_settles_at_rest_height() {
        let (scene, pipe, _) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        assert!(bridge.active_animations() > 0);

        bridge.tick_animations(10.0);
        assert_eq!(bridge.active_animations(), 0);
        let mirror = bridge.mirror(pipe).expect("Mirror erwartet");
        assert!((mirror.position.y - MIRROR_HEIGHT_Y).abs() < 1e-6);
    }

    #[test]
    fn test_clear_tears_everything_down() {
        let (scene, pipe, elbow) = scene_with_pipe_and_elbow();
        let mut bridge = SyncBridge::new();
        bridge.sync_from_2d(&scene);
        bridge.connect(pipe, PortId::Right, elbow, PortId::Left);

        bridge.clear();
        assert_eq!(bridge.mirror_count(), 0);
        assert_eq!(bridge.live_resources(), 0);
        assert!(bridge.connections().is_empty());
    }
}
