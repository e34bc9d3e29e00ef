//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod file_io;
pub mod selection;
pub mod sync3d;
pub mod view;
