//! JSON Import/Export und PNG-Rasterung für Rack-Designs.
//!
//! Das JSON-Format ist flach: eine Komponentenliste, die abgeleitete
//! Stückliste und optionale Port-Verbindungen als Index-Tupel.

pub mod json;
pub mod png;

pub use json::{export_design, parse_design, DesignFile};
pub use png::{encode_png, render_png};
