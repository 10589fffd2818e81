//! Data-driven grid content and loaders.
//!
//! Provides loaders for RON/TOML data files:
//! - Grid configuration (TOML)
//! - Named shape presets (RON)
//! - Board layouts with placed pieces (RON)
//!
//! Loaders use grid-core types directly with serde for deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ShapeCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{BoardLoader, ConfigLoader, ShapeLoader};
