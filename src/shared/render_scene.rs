//! Render-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::{Vec2, Vec3};

use super::options::EditorOptions;
use crate::core::{Guide, PartKind};
use crate::sync::PortId;

/// Darstellbare 2D-Komponente für einen Frame.
#[derive(Debug, Clone)]
pub struct ComponentSprite {
    /// Komponenten-ID für Hit-Tests und Intents
    pub id: u64,
    /// Katalogtyp (bestimmt Farbe und Icon)
    pub kind: PartKind,
    /// Obere linke Ecke in Canvas-Koordinaten
    pub position: Vec2,
    /// Footprint [Breite, Höhe] in Canvas-Einheiten
    pub size: Vec2,
    /// Rotation in Grad um das Footprint-Zentrum
    pub rotation_deg: i32,
    /// Selektions-Hervorhebung
    pub selected: bool,
}

/// Darstellbarer 3D-Mirror (Viewer zeichnet isometrisch).
#[derive(Debug, Clone)]
pub struct MirrorSprite {
    /// Zugehörige Komponenten-ID
    pub id: u64,
    /// Katalogtyp
    pub kind: PartKind,
    /// Weltposition in Metern
    pub position: Vec3,
    /// Rotation um die y-Achse (Radiant)
    pub rotation_y: f32,
    /// Rohrlänge in Metern (0 für Fittings)
    pub length_m: f32,
    /// Selektions-Hervorhebung
    pub selected: bool,
    /// Ports mit Weltposition
    pub ports: Vec<(PortId, Vec3)>,
}

/// Verbindungslinie zwischen zwei Port-Weltpositionen.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLine {
    pub from: Vec3,
    pub to: Vec3,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone, Default)]
pub struct RenderScene {
    /// Alle Komponenten in z-Reihenfolge (hinten zuerst)
    pub sprites: Vec<ComponentSprite>,
    /// Aktive Ausrichtungslinien während eines Drags
    pub guides: Vec<Guide>,
    /// Mirrors für den 3D-Viewer (leer, wenn 3D inaktiv)
    pub mirrors: Vec<MirrorSprite>,
    /// Verbindungslinien zwischen verbundenen Ports
    pub connections: Vec<ConnectionLine>,
    /// Zoom-Faktor des 2D-Canvas
    pub zoom: f32,
    /// Raster sichtbar
    pub grid_visible: bool,
    /// 3D-Ansicht aktiv
    pub mode_3d: bool,
    /// Aktuell bewaffnetes Platzier-Werkzeug
    pub armed_tool: Option<PartKind>,
    /// Laufzeit-Optionen für Raster und Snap
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Komponenten zum Zeichnen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
