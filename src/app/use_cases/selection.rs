//! Use-Cases für die Einzelselektion.

use crate::app::AppState;

/// Setzt die Selektion auf die Komponente, oder hebt sie auf.
///
/// Das Eigenschaften-Panel folgt der Selektion: sichtbar genau dann,
/// wenn etwas selektiert ist.
pub fn select(state: &mut AppState, id: Option<u64>) {
    let id = id.filter(|&id| state.scene.contains(id));

    for component in state.scene.iter_mut() {
        component.selected = Some(component.id) == id;
    }
    state.selection.selected_id = id;
    state.ui.properties_visible = id.is_some();
}
