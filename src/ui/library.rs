//! Teilebibliothek (linke Seitenleiste) zum Bewaffnen des Platzier-Werkzeugs.

use crate::app::{AppIntent, AppState};
use crate::core::PartKind;

/// Rendert die Teilebibliothek und gibt erzeugte Events zurück.
pub fn render_library(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("library_panel")
        .default_width(160.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Teilebibliothek");
            ui.separator();

            for kind in PartKind::ALL {
                let spec = kind.spec();
                let armed = state.editor.armed_tool == Some(kind);
                let label = format!("{} {}", spec.icon, super::part_name(kind));
                let button = egui::Button::new(label).min_size(egui::vec2(140.0, 28.0));

                if ui.add(button.selected(armed)).clicked() {
                    events.push(AppIntent::ToolArmRequested { kind });
                }
            }

            ui.separator();
            if state.editor.armed_tool.is_some() {
                ui.label("Klick auf das Canvas platziert.\nEsc bricht ab.");
            } else {
                ui.label("Teil wählen, dann platzieren.");
            }
        });

    events
}
