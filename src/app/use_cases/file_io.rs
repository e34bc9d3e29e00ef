//! Use-Cases für JSON-Import/Export und PNG-Export.

use anyhow::{Context, Result};

use crate::app::AppState;
use crate::io;

/// Schreibt das aktuelle Design als JSON nach `path`.
pub fn export_json(state: &mut AppState, path: &str) -> Result<()> {
    let json = io::export_design(&state.scene, state.sync.connections())?;
    std::fs::write(path, json).with_context(|| format!("Kann Design nicht schreiben: {}", path))?;

    state.ui.status_message = Some(format!("Design exportiert: {}", path));
    log::info!("JSON-Export nach {}", path);
    Ok(())
}

/// Rastert die Szene und schreibt sie als PNG nach `path`.
pub fn export_png(state: &mut AppState, path: &str) -> Result<()> {
    let image = io::render_png(
        &state.scene,
        state.view.grid_visible,
        state.options.grid_size,
    );
    let bytes = io::encode_png(&image)?;
    std::fs::write(path, bytes).with_context(|| format!("Kann PNG nicht schreiben: {}", path))?;

    state.ui.status_message = Some(format!("PNG exportiert: {}", path));
    log::info!("PNG-Export nach {} ({}x{})", path, image.width(), image.height());
    Ok(())
}

/// Lädt eine Design-Datei und ersetzt die aktuelle Szene.
///
/// Erst wird der komplette Bestand abgebaut (Selektion, Mirrors),
/// dann jede Komponente neu erzeugt und deklarierte Verbindungen
/// wiederhergestellt.
pub fn import_design(state: &mut AppState, path: &str) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Kann Design nicht lesen: {}", path))?;
    let (scene, connections) = io::parse_design(&text)?.into_scene();

    super::selection::select(state, None);
    state.sync.clear();
    state.scene = scene;
    state.refresh_derived();

    for c in &connections {
        if !state.sync.connect(c.comp1, c.port1, c.comp2, c.port2) {
            log::warn!("Import: Verbindung {:?} nicht wiederherstellbar", c);
        }
    }

    state.ui.status_message = Some(format!(
        "Design geladen: {} Komponenten",
        state.scene.len()
    ));
    log::info!("Design importiert aus {}", path);
    Ok(())
}
