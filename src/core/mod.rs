//! Core-Domänentypen: Katalog, Komponenten, Szene, Snap, Stückliste.
//!
//! Dieses Modul ist frei von UI- und Rendering-Abhängigkeiten:
//! - Catalog: statische Teile-Metadaten und Geometrie-Tabelle
//! - Component: platzierte Instanz eines Katalogtyps
//! - Scene: geordneter Container aller Komponenten
//! - Snap: Raster- und Nachbar-Ausrichtung
//! - BOM: abgeleitete Stückliste

pub mod bom;
pub mod catalog;
pub mod component;
pub mod scene;
pub mod snap;

pub use bom::{compute_bom, BomReport};
pub use catalog::{PartKind, PartSpec};
pub use component::Component;
pub use scene::Scene;
pub use snap::{alignment_guides, grid_snap, snap_to_guides, Guide, GuideAxis};
