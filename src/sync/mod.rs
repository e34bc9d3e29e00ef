//! Dual-Repräsentations-Sync: hält pro 2D-Komponente einen 3D-Mirror in
//! Gleichschritt, in beide Richtungen, ohne Rückkopplungsschleifen.

pub mod animation;
pub mod bridge;
pub mod mirror;
pub mod ports;
pub mod transform;

pub use animation::{smoothstep, Animator, TweenTarget};
pub use bridge::{MirrorEdit, SyncBridge};
pub use mirror::{Mirror, MirrorShape, ResourcePool, SubMeshRole};
pub use ports::{polarity_of, ports_for, PortConnection, PortId, PortPolarity};
