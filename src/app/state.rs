//! Application State, zentrale Datenhaltung.
//!
//! Ein `AppState` pro Editor-Instanz; alle Abhängigkeiten werden
//! explizit übergeben, es gibt keinen globalen Zustand.

use super::CommandLog;
use crate::core::{compute_bom, BomReport, Guide, PartKind, Scene};
use crate::shared::options::{ZOOM_MAX, ZOOM_MIN};
use crate::shared::EditorOptions;
use crate::sync::SyncBridge;

/// Zustand des Platzier-Werkzeugs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorToolState {
    /// Bewaffneter Katalogtyp; bleibt nach dem Platzieren bewaffnet,
    /// damit mehrere Teile in Folge gesetzt werden können
    pub armed_tool: Option<PartKind>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (nichts bewaffnet).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Auswahlbezogener Anwendungszustand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    /// Aktuell selektierte Komponente (Einzelselektion)
    pub selected_id: Option<u64>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Zoom-Faktor des 2D-Canvas
    pub zoom: f32,
    /// Raster sichtbar
    pub grid_visible: bool,
    /// Snap an Raster und Nachbarkanten aktiv
    pub snap_enabled: bool,
    /// 3D-Ansicht aktiv
    pub mode_3d: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (2D, Raster und Snap an).
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            grid_visible: true,
            snap_enabled: true,
            mode_3d: false,
        }
    }

    /// Setzt den Zoom-Faktor, geklemmt auf die zulässigen Grenzen.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Eigenschaften-Panel sichtbar (folgt der Selektion)
    pub properties_visible: bool,
    /// Aktive Ausrichtungslinien während eines Drags
    pub guides: Vec<Guide>,
    /// Ob der JSON-Export-Dialog geöffnet werden soll
    pub show_export_json_dialog: bool,
    /// Ob der PNG-Export-Dialog geöffnet werden soll
    pub show_export_png_dialog: bool,
    /// Ob der Import-Dialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Temporäre Statusnachricht (z.B. Export-Ergebnis)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Die Szene als alleinige Quelle der Wahrheit
    pub scene: Scene,
    /// Abgeleitete Stückliste (reine Funktion der Szene)
    pub bom: BomReport,
    /// Selection-State
    pub selection: SelectionState,
    /// Werkzeug-State
    pub editor: EditorToolState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// 2D↔3D-Brücke (Mirrors, Verbindungen, Animationen)
    pub sync: SyncBridge,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Raster, Snap-Distanz)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            bom: BomReport::default(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            sync: SyncBridge::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Aktualisiert allen abgeleiteten Zustand nach einer Szenen-Mutation.
    ///
    /// Jede mutierende Operation endet hier: Stückliste neu berechnen
    /// und die 3D-Mirrors nachziehen.
    pub fn refresh_derived(&mut self) {
        self.bom = compute_bom(&self.scene);
        self.sync.sync_from_2d(&self.scene);
    }

    /// Gibt die Anzahl der Komponenten zurück (für UI-Anzeige).
    pub fn component_count(&self) -> usize {
        self.scene.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
