//! Zentrale Konfiguration für den Rackit-Designer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Canvas & Raster ─────────────────────────────────────────────────

/// Rastergröße in Canvas-Einheiten (Pixel bei Zoom 1.0).
pub const GRID_SIZE: f32 = 20.0;
/// Fangabstand für Nachbar-Ausrichtung (Kantenabstand in Canvas-Einheiten).
pub const SNAP_DISTANCE: f32 = 10.0;
/// Fallback-Footprint für Komponenten ohne Geometrie-Eintrag (Breite = Höhe).
pub const DEFAULT_FOOTPRINT: f32 = 40.0;

// ── Zoom ────────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 3.0;
/// Zoom-Schritt bei stufenweisem Zoom (Toolbar / Shortcuts).
pub const ZOOM_STEP: f32 = 1.2;

// ── Rohre ───────────────────────────────────────────────────────────

/// Minimale Rohrlänge in Zentimetern.
pub const PIPE_LENGTH_MIN_CM: u32 = 10;
/// Maximale Rohrlänge in Zentimetern.
pub const PIPE_LENGTH_MAX_CM: u32 = 300;
/// Standard-Rohrlänge beim Platzieren.
pub const PIPE_LENGTH_DEFAULT_CM: u32 = 100;
/// Darstellungsmaßstab: 1 cm Rohrlänge = 2 Canvas-Einheiten.
pub const PX_PER_CM: f32 = 2.0;

// ── PNG-Export ──────────────────────────────────────────────────────

/// Rand um die Inhalts-Bounding-Box beim PNG-Export.
pub const PNG_PADDING: u32 = 50;
/// Export-Größe bei leerer Szene (Breite × Höhe).
pub const PNG_EMPTY_SIZE: [u32; 2] = [800, 600];

/// Zur Laufzeit änderbare Editor-Optionen (persistiert als TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Rastergröße in Canvas-Einheiten
    pub grid_size: f32,
    /// Fangabstand für Nachbar-Ausrichtung
    pub snap_distance: f32,
    /// Ports im 3D-Viewer anzeigen
    pub show_ports: bool,
    /// Verbindungslinien im 3D-Viewer anzeigen
    pub show_connections: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_distance: SNAP_DISTANCE,
            show_ports: true,
            show_connections: true,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehler Default mit Warnung.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(options) => options,
                Err(e) => {
                    log::warn!("Optionen aus {} nicht lesbar ({}), nutze Defaults", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
