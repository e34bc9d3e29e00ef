//! Rackit Designer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;
pub mod sync;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{compute_bom, BomReport, Component, PartKind, PartSpec, Scene};
pub use io::{export_design, parse_design, render_png, DesignFile};
pub use shared::{EditorOptions, RenderScene};
pub use sync::{MirrorEdit, PortConnection, PortId, SyncBridge};
