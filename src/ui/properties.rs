//! Rechte Seitenleiste: Eigenschaften der Selektion und Stückliste.

use glam::Vec2;

use super::bom_panel;
use crate::app::{AppIntent, AppState};
use crate::core::Component;
use crate::shared::options::{PIPE_LENGTH_MAX_CM, PIPE_LENGTH_MIN_CM};

/// Rendert die rechte Seitenleiste und gibt erzeugte Events zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("side_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            let selected = state
                .selection
                .selected_id
                .and_then(|id| state.scene.find(id));

            if state.ui.properties_visible {
                if let Some(component) = selected {
                    render_component_properties(ui, component, &mut events);
                }
            } else {
                ui.label("Keine Selektion");
            }

            ui.separator();
            ui.heading("Stückliste");
            ui.separator();
            bom_panel::render_bom(ui, &state.bom);
        });

    events
}

fn render_component_properties(
    ui: &mut egui::Ui,
    component: &Component,
    events: &mut Vec<AppIntent>,
) {
    let spec = component.kind.spec();
    ui.label(format!(
        "{} {} (#{})",
        spec.icon,
        super::part_name(component.kind),
        component.id
    ));
    ui.separator();

    // Position (obere linke Ecke)
    let mut x = component.position.x;
    let mut y = component.position.y;
    ui.horizontal(|ui| {
        ui.label("X:");
        let changed_x = ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed();
        ui.label("Y:");
        let changed_y = ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed();
        if changed_x || changed_y {
            events.push(AppIntent::SetPositionRequested {
                id: component.id,
                pos: Vec2::new(x, y),
            });
        }
    });

    // Rotation in 90°-Schritten plus Direkteingabe
    let mut deg = component.rotation_deg;
    ui.horizontal(|ui| {
        ui.label("Rotation:");
        if ui
            .add(egui::DragValue::new(&mut deg).speed(1).suffix("°"))
            .changed()
        {
            events.push(AppIntent::SetRotationRequested {
                id: component.id,
                deg,
            });
        }
        if ui.button("⟲").clicked() {
            events.push(AppIntent::RotateSelectedRequested { delta_deg: -90 });
        }
        if ui.button("⟳").clicked() {
            events.push(AppIntent::RotateSelectedRequested { delta_deg: 90 });
        }
    });

    // Länge nur für Rohrsegmente
    if let Some(length_cm) = component.length_cm {
        let mut length = length_cm;
        ui.horizontal(|ui| {
            ui.label("Länge:");
            if ui
                .add(
                    egui::DragValue::new(&mut length)
                        .speed(1)
                        .range(PIPE_LENGTH_MIN_CM..=PIPE_LENGTH_MAX_CM)
                        .suffix(" cm"),
                )
                .changed()
            {
                events.push(AppIntent::SetLengthRequested {
                    id: component.id,
                    value: length as f64,
                });
            }
        });
    }
}
