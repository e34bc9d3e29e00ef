//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Komponenten: {}", state.component_count()));

            ui.separator();
            ui.label(format!("Teile gesamt: {}", state.bom.total_items()));

            ui.separator();
            ui.label(format!("Zoom: {:.0}%", state.view.zoom * 100.0));

            ui.separator();
            if let Some(kind) = state.editor.armed_tool {
                ui.label(format!("Werkzeug: {}", super::part_name(kind)));
            } else {
                ui.label("Werkzeug: keins");
            }

            if let Some(id) = state.selection.selected_id {
                ui.separator();
                ui.label(format!("Selektiert: #{}", id));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }
        });
    });
}
