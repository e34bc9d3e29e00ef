//! UI-Komponenten: Teilebibliothek, Toolbar, Canvas, 3D-Viewer, Panels.
//!
//! Alle Render-Funktionen sind passiv: sie zeichnen aus dem `AppState`
//! bzw. der `RenderScene` und geben erzeugte `AppIntent`s zurück,
//! mutiert wird ausschließlich über die Command-Pipeline.

pub mod bom_panel;
pub mod canvas;
pub mod dialogs;
mod keyboard;
pub mod library;
pub mod properties;
pub mod status;
pub mod toolbar;
pub mod viewer3d;

use crate::core::PartKind;

pub use canvas::render_canvas;
pub use dialogs::handle_file_dialogs;
pub use keyboard::collect_keyboard_intents;
pub use library::render_library;
pub use properties::render_side_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use viewer3d::render_viewer3d;

/// Löst den `name_key` eines Katalogtyps in den Anzeigenamen auf.
pub(crate) fn part_name(kind: PartKind) -> &'static str {
    match kind {
        PartKind::PipeSegment => "Rohrsegment",
        PartKind::ElbowJoint => "Winkel 90°",
        PartKind::TeeJoint => "T-Stück",
        PartKind::WallMount => "Wandhalter",
    }
}
