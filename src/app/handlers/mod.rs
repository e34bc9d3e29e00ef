//! Feature-Handler: dünne Dispatch-Schicht zwischen Controller und Use-Cases.

pub mod editing;
pub mod file_io;
pub mod selection;
pub mod sync3d;
pub mod view;
