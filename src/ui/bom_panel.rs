//! Stücklisten-Anzeige (gruppierte Positionen plus Gewichtsschätzung).

use crate::core::{BomReport, PartKind};

/// Rendert die Stückliste in das übergebene Ui.
pub fn render_bom(ui: &mut egui::Ui, report: &BomReport) {
    if report.total_items() == 0 {
        ui.label("Szene ist leer");
        return;
    }

    // Rohre nach Länge aufsteigend
    for (&length_cm, &count) in &report.pipe_groups {
        ui.label(format!("{}× Rohr {} cm", count, length_cm));
    }

    for (kind, count) in [
        (PartKind::ElbowJoint, report.elbow_count),
        (PartKind::TeeJoint, report.tee_count),
        (PartKind::WallMount, report.wall_mount_count),
    ] {
        if count > 0 {
            ui.label(format!("{}× {}", count, super::part_name(kind)));
        }
    }

    ui.separator();
    ui.label(format!(
        "Gesamt: {} Teile, ca. {:.2} kg",
        report.total_items(),
        report.estimated_weight_kg()
    ));
}
