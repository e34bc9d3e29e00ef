//! Baut die Render-Szene aus dem AppState.

use crate::app::AppState;
use crate::shared::{ComponentSprite, ConnectionLine, MirrorSprite, RenderScene};
use crate::sync::ports_for;

/// Sammelt alle für einen Frame nötigen Daten in einen read-only Vertrag.
pub fn build(state: &AppState) -> RenderScene {
    let sprites = state
        .scene
        .iter()
        .map(|c| ComponentSprite {
            id: c.id,
            kind: c.kind,
            position: c.position,
            size: c.footprint(),
            rotation_deg: c.rotation_deg,
            selected: c.selected,
        })
        .collect();

    let (mirrors, connections) = if state.view.mode_3d {
        let mirrors = state
            .sync
            .mirrors()
            .map(|m| MirrorSprite {
                id: m.component_id,
                kind: m.kind,
                position: m.position,
                rotation_y: m.rotation_y,
                length_m: m.pipe_length_m(),
                selected: state.selection.selected_id == Some(m.component_id),
                ports: ports_for(m.kind)
                    .iter()
                    .filter_map(|&(port, _)| Some((port, m.port_world_position(port)?)))
                    .collect(),
            })
            .collect();

        let connections = state
            .sync
            .connections()
            .iter()
            .filter_map(|c| {
                let from = state.sync.mirror(c.comp1)?.port_world_position(c.port1)?;
                let to = state.sync.mirror(c.comp2)?.port_world_position(c.port2)?;
                Some(ConnectionLine { from, to })
            })
            .collect();
        (mirrors, connections)
    } else {
        (Vec::new(), Vec::new())
    };

    RenderScene {
        sprites,
        guides: state.ui.guides.clone(),
        mirrors,
        connections,
        zoom: state.view.zoom,
        grid_visible: state.view.grid_visible,
        mode_3d: state.view.mode_3d,
        armed_tool: state.editor.armed_tool,
        options: state.options.clone(),
    }
}
