//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ToolArmRequested { kind } => vec![AppCommand::ArmTool { kind: Some(kind) }],
        AppIntent::EscapePressed => vec![
            AppCommand::ArmTool { kind: None },
            AppCommand::SelectComponent { id: None },
        ],
        AppIntent::CanvasClicked { pos } => {
            // Bewaffnetes Werkzeug platziert; sonst Hit-Test für Selektion
            if let Some(kind) = state.editor.armed_tool {
                vec![AppCommand::PlaceComponent { kind, pos }]
            } else {
                let id = state.scene.component_at(pos).map(|c| c.id);
                vec![AppCommand::SelectComponent { id }]
            }
        }
        AppIntent::ComponentPickRequested { id } => {
            vec![AppCommand::SelectComponent { id: Some(id) }]
        }
        AppIntent::DragMoved { id, pos } => vec![AppCommand::MoveComponent { id, pos }],
        AppIntent::DragEnded { id } => vec![AppCommand::EndComponentDrag { id }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::RotateSelectedRequested { delta_deg } => {
            vec![AppCommand::RotateSelected { delta_deg }]
        }
        AppIntent::SetPositionRequested { id, pos } => {
            vec![AppCommand::SetComponentPosition { id, pos }]
        }
        AppIntent::SetRotationRequested { id, deg } => {
            vec![AppCommand::SetComponentRotation { id, deg }]
        }
        AppIntent::SetLengthRequested { id, value } => {
            vec![AppCommand::SetComponentLength { id, value }]
        }
        AppIntent::GridToggled => vec![AppCommand::ToggleGrid],
        AppIntent::SnapToggled => vec![AppCommand::ToggleSnap],
        AppIntent::View3DToggled => vec![AppCommand::Toggle3D],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ZoomResetRequested => vec![AppCommand::ResetZoom],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearScene],
        AppIntent::ExportJsonRequested => vec![AppCommand::RequestExportJsonDialog],
        AppIntent::ExportPngRequested => vec![AppCommand::RequestExportPngDialog],
        AppIntent::ImportRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ExportJsonPathSelected { path } => vec![AppCommand::ExportJson { path }],
        AppIntent::ExportPngPathSelected { path } => vec![AppCommand::ExportPng { path }],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::ImportDesign { path }],
        AppIntent::MirrorMoved {
            id,
            world_pos,
            rotation_y,
        } => vec![AppCommand::ApplyMirrorMove {
            id,
            world_pos,
            rotation_y,
        }],
        AppIntent::ConnectPortsRequested {
            comp1,
            port1,
            comp2,
            port2,
        } => vec![AppCommand::ConnectPorts {
            comp1,
            port1,
            comp2,
            port2,
        }],
        AppIntent::DisconnectPortRequested { comp, port } => {
            vec![AppCommand::DisconnectPort { comp, port }]
        }
        AppIntent::FrameAdvanced { dt } => vec![AppCommand::TickAnimations { dt }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
