use glam::Vec2;
use rackit_designer::{AppCommand, AppController, AppIntent, AppState, PartKind};

fn place(controller: &mut AppController, state: &mut AppState, kind: PartKind, pos: Vec2) -> u64 {
    controller
        .handle_intent(state, AppIntent::ToolArmRequested { kind })
        .expect("ToolArmRequested sollte funktionieren");
    controller
        .handle_intent(state, AppIntent::CanvasClicked { pos })
        .expect("CanvasClicked sollte funktionieren");
    state
        .selection
        .selected_id
        .expect("Platzierte Komponente sollte selektiert sein")
}

#[test]
fn test_place_via_armed_tool_selects_and_keeps_tool() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let id = place(
        &mut controller,
        &mut state,
        PartKind::PipeSegment,
        Vec2::new(100.0, 100.0),
    );

    assert_eq!(state.scene.len(), 1);
    assert_eq!(state.selection.selected_id, Some(id));
    assert!(state.ui.properties_visible);
    // Werkzeug bleibt für Mehrfach-Platzierung bewaffnet
    assert_eq!(state.editor.armed_tool, Some(PartKind::PipeSegment));

    // Zweiter Klick platziert direkt das nächste Teil
    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasClicked {
                pos: Vec2::new(300.0, 100.0),
            },
        )
        .expect("CanvasClicked sollte funktionieren");
    assert_eq!(state.scene.len(), 2);
}

#[test]
fn test_escape_disarms_tool_and_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(
        &mut controller,
        &mut state,
        PartKind::ElbowJoint,
        Vec2::new(50.0, 50.0),
    );

    controller
        .handle_intent(&mut state, AppIntent::EscapePressed)
        .expect("EscapePressed sollte funktionieren");

    assert_eq!(state.editor.armed_tool, None);
    assert_eq!(state.selection.selected_id, None);
    assert!(!state.ui.properties_visible);
}

#[test]
fn test_delete_selected_clears_selection_and_hides_panel() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = place(
        &mut controller,
        &mut state,
        PartKind::WallMount,
        Vec2::new(60.0, 60.0),
    );

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte funktionieren");

    assert!(!state.scene.contains(id));
    assert_eq!(state.selection.selected_id, None);
    assert!(!state.ui.properties_visible);
    assert_eq!(state.bom.total_items(), 0);
}

#[test]
fn test_bom_follows_every_mutation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let pipe = place(
        &mut controller,
        &mut state,
        PartKind::PipeSegment,
        Vec2::new(100.0, 100.0),
    );
    place(
        &mut controller,
        &mut state,
        PartKind::ElbowJoint,
        Vec2::new(300.0, 100.0),
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetLengthRequested {
                id: pipe,
                value: 150.0,
            },
        )
        .expect("SetLengthRequested sollte funktionieren");

    assert_eq!(state.bom.pipe_groups.get(&150), Some(&1));
    assert_eq!(state.bom.elbow_count, 1);
    assert_eq!(state.bom.tee_count, 0);
    assert_eq!(state.bom.wall_mount_count, 0);
}

#[test]
fn test_add_remove_restores_bom_and_mirror_map() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(
        &mut controller,
        &mut state,
        PartKind::PipeSegment,
        Vec2::new(100.0, 100.0),
    );
    let bom_before = state.bom.clone();
    let mirrors_before = state.sync.mirror_count();
    let resources_before = state.sync.live_resources();

    let extra = place(
        &mut controller,
        &mut state,
        PartKind::PipeSegment,
        Vec2::new(400.0, 400.0),
    );
    assert!(state.sync.mirror_count() > mirrors_before);

    controller
        .handle_intent(&mut state, AppIntent::ComponentPickRequested { id: extra })
        .expect("ComponentPickRequested sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .expect("DeleteSelectedRequested sollte funktionieren");

    assert_eq!(state.bom, bom_before);
    assert_eq!(state.sync.mirror_count(), mirrors_before);
    assert_eq!(state.sync.live_resources(), resources_before);
}

#[test]
fn test_rotation_stays_normalized_through_pipeline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = place(
        &mut controller,
        &mut state,
        PartKind::ElbowJoint,
        Vec2::new(100.0, 100.0),
    );

    for _ in 0..7 {
        controller
            .handle_intent(&mut state, AppIntent::RotateSelectedRequested { delta_deg: 90 })
            .expect("RotateSelectedRequested sollte funktionieren");
    }
    controller
        .handle_intent(
            &mut state,
            AppIntent::RotateSelectedRequested { delta_deg: -450 },
        )
        .expect("RotateSelectedRequested sollte funktionieren");

    let rotation = state.scene.find(id).expect("Komponente erwartet").rotation_deg;
    assert!((0..360).contains(&rotation));
    assert_eq!(rotation, 180);
}

#[test]
fn test_mirror_move_writes_back_to_scene_without_ping_pong() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = place(
        &mut controller,
        &mut state,
        PartKind::PipeSegment,
        Vec2::new(100.0, 100.0),
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::MirrorMoved {
                id,
                world_pos: glam::Vec3::new(1.0, 0.5, -1.0),
                rotation_y: std::f32::consts::FRAC_PI_2,
            },
        )
        .expect("MirrorMoved sollte funktionieren");

    let component = state.scene.find(id).expect("Komponente erwartet");
    assert_eq!(component.position, Vec2::new(440.0, 260.0));
    assert_eq!(component.rotation_deg, 90);

    // Mirror behält die 3D-seitige Position (kein Rücküberschreiben)
    let mirror = state.sync.mirror(id).expect("Mirror erwartet");
    assert!((mirror.position.x - 1.0).abs() < 1e-4);
}

#[test]
fn test_zoom_commands_respect_limits() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..20 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .expect("ZoomInRequested sollte funktionieren");
    }
    assert!(state.view.zoom <= 3.0);

    for _ in 0..40 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomOutRequested)
            .expect("ZoomOutRequested sollte funktionieren");
    }
    assert!(state.view.zoom >= 0.5);

    controller
        .handle_intent(&mut state, AppIntent::ZoomResetRequested)
        .expect("ZoomResetRequested sollte funktionieren");
    assert_eq!(state.view.zoom, 1.0);
}

#[test]
fn test_clear_all_tears_down_scene_and_mirrors() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(
        &mut controller,
        &mut state,
        PartKind::PipeSegment,
        Vec2::new(100.0, 100.0),
    );
    place(
        &mut controller,
        &mut state,
        PartKind::TeeJoint,
        Vec2::new(300.0, 100.0),
    );

    controller
        .handle_intent(&mut state, AppIntent::ClearAllRequested)
        .expect("ClearAllRequested sollte funktionieren");

    assert!(state.scene.is_empty());
    assert_eq!(state.bom.total_items(), 0);
    assert_eq!(state.sync.mirror_count(), 0);
    assert_eq!(state.sync.live_resources(), 0);
    assert_eq!(state.selection.selected_id, None);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}
