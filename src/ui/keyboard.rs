//! Keyboard-Shortcuts des Editors.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, AppState};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Shortcuts pausieren, solange ein Textfeld fokussiert ist
    if ctx.wants_keyboard_input() {
        return events;
    }

    let (escape, delete, key_g, key_s, key_3, plus, minus, zero) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::G),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Num3),
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Num0),
        )
    });

    if escape {
        events.push(AppIntent::EscapePressed);
    }
    if delete && state.selection.selected_id.is_some() {
        events.push(AppIntent::DeleteSelectedRequested);
    }
    if key_g {
        events.push(AppIntent::GridToggled);
    }
    if key_s {
        events.push(AppIntent::SnapToggled);
    }
    if key_3 {
        events.push(AppIntent::View3DToggled);
    }
    if plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if minus {
        events.push(AppIntent::ZoomOutRequested);
    }
    if zero {
        events.push(AppIntent::ZoomResetRequested);
    }

    events
}
