//! Shape preset loader.
//!
//! Reads a RON list of named shapes:
//!
//! ```ron
//! [
//!     (name: "blast", shape: Square(range: 2)),
//!     (name: "breath", shape: Cone(range: 3, direction: (x: 1, y: 0))),
//! ]
//! ```

use std::path::Path;

use grid_core::ShapeSpec;
use serde::{Deserialize, Serialize};

use crate::catalog::ShapeCatalog;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedShapeRon {
    name: String,
    shape: ShapeSpec,
}

/// Loader for shape presets from RON files.
pub struct ShapeLoader;

impl ShapeLoader {
    pub fn load(path: &Path) -> LoadResult<ShapeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses the preset list. Duplicate names are rejected.
    pub fn parse(content: &str) -> LoadResult<ShapeCatalog> {
        let entries: Vec<NamedShapeRon> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shapes RON: {}", e))?;

        let mut catalog = ShapeCatalog::new();
        for entry in entries {
            if catalog.insert(entry.name.clone(), entry.shape).is_some() {
                anyhow::bail!("Duplicate shape name: {}", entry.name);
            }
        }

        tracing::debug!(shapes = catalog.len(), "loaded shape presets");
        Ok(catalog)
    }
}
