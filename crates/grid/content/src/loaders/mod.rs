//! Content loaders for reading grid data from files.

pub mod board;
pub mod config;
pub mod shapes;

pub use board::BoardLoader;
pub use config::ConfigLoader;
pub use shapes::ShapeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
