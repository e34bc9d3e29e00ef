//! Gemeinsame Verträge zwischen App-, Sync- und UI-Layer.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{ComponentSprite, ConnectionLine, MirrorSprite, RenderScene};
