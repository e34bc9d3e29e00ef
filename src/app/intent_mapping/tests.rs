use glam::Vec2;

use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::PartKind;

#[test]
fn test_canvas_click_places_when_tool_armed() {
    let mut state = AppState::new();
    state.editor.armed_tool = Some(PartKind::ElbowJoint);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(120.0, 80.0),
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::PlaceComponent {
            kind: PartKind::ElbowJoint,
            ..
        }]
    ));
}

#[test]
fn test_canvas_click_selects_topmost_component() {
    let mut state = AppState::new();
    let id = state.scene.spawn(PartKind::WallMount, Vec2::new(100.0, 100.0));

    // Klick in den Footprint trifft die Komponente
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(110.0, 110.0),
        },
    );
    assert!(
        matches!(commands.as_slice(), [AppCommand::SelectComponent { id: Some(hit) }] if *hit == id)
    );

    // Klick ins Leere hebt die Selektion auf
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(900.0, 900.0),
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::SelectComponent { id: None }]
    ));
}

#[test]
fn test_escape_disarms_and_deselects() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::EscapePressed);
    assert!(matches!(
        commands.as_slice(),
        [
            AppCommand::ArmTool { kind: None },
            AppCommand::SelectComponent { id: None }
        ]
    ));
}
