//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::ArmTool { kind } => handlers::editing::arm_tool(state, kind),
            AppCommand::PlaceComponent { kind, pos } => {
                handlers::editing::place_component(state, kind, pos)
            }
            AppCommand::MoveComponent { id, pos } => {
                handlers::editing::move_component(state, id, pos)
            }
            AppCommand::EndComponentDrag { id } => handlers::editing::end_drag(state, id),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::RotateSelected { delta_deg } => {
                handlers::editing::rotate_selected(state, delta_deg)
            }
            AppCommand::SetComponentPosition { id, pos } => {
                handlers::editing::set_position(state, id, pos)
            }
            AppCommand::SetComponentRotation { id, deg } => {
                handlers::editing::set_rotation(state, id, deg)
            }
            AppCommand::SetComponentLength { id, value } => {
                handlers::editing::set_length(state, id, value)
            }
            AppCommand::ClearScene => handlers::editing::clear_scene(state),

            // === Selektion ===
            AppCommand::SelectComponent { id } => handlers::selection::select(state, id),

            // === View ===
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),
            AppCommand::ToggleSnap => handlers::view::toggle_snap(state),
            AppCommand::Toggle3D => handlers::view::toggle_3d(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetZoom => handlers::view::reset_zoom(state),

            // === Datei-I/O ===
            AppCommand::RequestExportJsonDialog => handlers::file_io::request_export_json(state),
            AppCommand::RequestExportPngDialog => handlers::file_io::request_export_png(state),
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::ExportJson { path } => handlers::file_io::export_json(state, &path)?,
            AppCommand::ExportPng { path } => handlers::file_io::export_png(state, &path)?,
            AppCommand::ImportDesign { path } => handlers::file_io::import_design(state, &path)?,

            // === 3D-Sync ===
            AppCommand::ConnectPorts {
                comp1,
                port1,
                comp2,
                port2,
            } => handlers::sync3d::connect_ports(state, comp1, port1, comp2, port2),
            AppCommand::DisconnectPort { comp, port } => {
                handlers::sync3d::disconnect_port(state, comp, port)
            }
            AppCommand::ApplyMirrorMove {
                id,
                world_pos,
                rotation_y,
            } => handlers::sync3d::apply_mirror_move(state, id, world_pos, rotation_y),
            AppCommand::TickAnimations { dt } => handlers::sync3d::tick_animations(state, dt),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
