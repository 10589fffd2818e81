//! Grid configuration loader.

use std::path::Path;

use grid_core::GridConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for grid configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GridConfig`] from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> LoadResult<GridConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GridConfig> {
        let config: GridConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.width == 0 || config.height == 0 {
            anyhow::bail!(
                "Grid must have at least one tile (got {}x{})",
                config.width,
                config.height
            );
        }

        Ok(config)
    }
}
