//! Die Szene: geordneter, exklusiver Container aller platzierten Komponenten.

use glam::Vec2;

use super::catalog::PartKind;
use super::component::Component;


/// Geordnete Komponenten-Liste (Einfügereihenfolge = Z-Order = BOM-Reihenfolge).
///
/// Die Szene ist alleiniger Eigentümer aller Komponenten. Sämtliche
/// Mutation läuft über die App-Command-Pipeline; die Szene selbst löst
/// keine abgeleiteten Updates aus.
///
/// `find` ist bewusst O(n): bei den erwarteten Dutzenden Komponenten
/// lohnt kein Index.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    components: Vec<Component>,
    next_id: u64,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            next_id: 1,
        }
    }

    /// Erstellt eine Komponente mit frischer ID und hängt sie an.
    /// Gibt die vergebene ID zurück.
    pub fn spawn(&mut self, kind: PartKind, position: Vec2) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.components.push(Component::new(id, kind, position));
        id
    }

    /// Hängt eine vorgefertigte Komponente an, O(1).
    ///
    /// Doppelte IDs werden abgewiesen (`false`); der ID-Zähler wird über
    /// die höchste gesehene ID gehoben, damit Sitzungs-IDs nie
    /// wiederverwendet werden.
    pub fn add(&mut self, component: Component) -> bool {
        if self.contains(component.id) {
            log::warn!("Komponente {} existiert bereits, add verworfen", component.id);
            return false;
        }
        self.next_id = self.next_id.max(component.id + 1);
        self.components.push(component);
        true
    }

    /// Entfernt eine Komponente per ID, O(n).
    pub fn remove(&mut self, id: u64) -> Option<Component> {
        let index = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(index))
    }

    /// Entfernt alle Komponenten.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Sucht eine Komponente per ID, O(n).
    pub fn find(&self, id: u64) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Sucht eine Komponente mutierbar per ID, O(n).
    pub fn find_mut(&mut self, id: u64) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Ob eine Komponente mit dieser ID existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.components.iter().any(|c| c.id == id)
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Iteriert mutierbar in Einfügereihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.components.iter_mut()
    }

    /// Anzahl der Komponenten.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Ob die Szene leer ist.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Trefferprüfung für Picking: oberste Komponente unter `pos`
    /// (Z-Order = Einfügereihenfolge, daher rückwärts gesucht).
    pub fn component_at(&self, pos: Vec2) -> Option<&Component> {
        self.components.iter().rev().find(|c| {
            let size = c.footprint();
            pos.x >= c.position.x
                && pos.y >= c.position.y
                && pos.x <= c.position.x + size.x
                && pos.y <= c.position.y + size.y
        })
    }
}
