//! Toolbar mit Ansichts-Umschaltern, Zoom und Import/Export.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Ansicht ──
            let mode_label = if state.view.mode_3d { "2D-Ansicht" } else { "3D-Ansicht" };
            if ui.button(mode_label).clicked() {
                events.push(AppIntent::View3DToggled);
            }

            ui.separator();

            if ui
                .add(egui::Button::new("Raster (G)").selected(state.view.grid_visible))
                .clicked()
            {
                events.push(AppIntent::GridToggled);
            }
            if ui
                .add(egui::Button::new("Snap (S)").selected(state.view.snap_enabled))
                .clicked()
            {
                events.push(AppIntent::SnapToggled);
            }

            ui.separator();

            // ── Zoom ──
            if ui.button("➖").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            ui.label(format!("{:.0}%", state.view.zoom * 100.0));
            if ui.button("➕").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("100%").clicked() {
                events.push(AppIntent::ZoomResetRequested);
            }

            ui.separator();

            // ── Selektion ──
            let has_selection = state.selection.selected_id.is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("⟲ 90°"))
                .clicked()
            {
                events.push(AppIntent::RotateSelectedRequested { delta_deg: -90 });
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("⟳ 90°"))
                .clicked()
            {
                events.push(AppIntent::RotateSelectedRequested { delta_deg: 90 });
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Löschen (Del)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            ui.separator();

            // ── Szene & Dateien ──
            if ui
                .add_enabled(!state.scene.is_empty(), egui::Button::new("Alles leeren"))
                .clicked()
            {
                events.push(AppIntent::ClearAllRequested);
            }
            if ui.button("Import…").clicked() {
                events.push(AppIntent::ImportRequested);
            }
            if ui.button("JSON-Export…").clicked() {
                events.push(AppIntent::ExportJsonRequested);
            }
            if ui.button("PNG-Export…").clicked() {
                events.push(AppIntent::ExportPngRequested);
            }
        });
    });

    events
}
