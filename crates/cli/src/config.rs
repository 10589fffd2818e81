//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for the demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub config_path: Option<PathBuf>,
    pub shapes_path: Option<PathBuf>,
    pub board_path: Option<PathBuf>,
    pub pick_shape: String,
    pub pick_filter: i32,
    pub pick_script: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            shapes_path: None,
            board_path: None,
            pick_shape: Self::DEFAULT_PICK_SHAPE.to_string(),
            pick_filter: -1,
            pick_script: Self::DEFAULT_PICK_SCRIPT.to_string(),
        }
    }
}

impl CliConfig {
    pub const DEFAULT_PICK_SHAPE: &'static str = "square";
    pub const DEFAULT_PICK_SCRIPT: &'static str = "enter 2 2; exit 2 2; enter 3 3; click 3 3";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRID_CONFIG` - TOML grid configuration (default: 8x8)
    /// - `GRID_SHAPES` - RON shape presets (default: built-in presets)
    /// - `GRID_BOARD` - RON board layout (default: empty grid from `GRID_CONFIG`)
    /// - `GRID_PICK_SHAPE` - Preset used by the pick session (default: `square`)
    /// - `GRID_PICK_FILTER` - Piece-type filter for the pick area (default: -1, any)
    /// - `GRID_PICK_SCRIPT` - Pointer events, `;`-separated `event x y` steps
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = read_env::<PathBuf>("GRID_CONFIG");
        config.shapes_path = read_env::<PathBuf>("GRID_SHAPES");
        config.board_path = read_env::<PathBuf>("GRID_BOARD");

        if let Some(shape) = read_env::<String>("GRID_PICK_SHAPE") {
            config.pick_shape = shape;
        }
        if let Some(filter) = read_env::<i32>("GRID_PICK_FILTER") {
            config.pick_filter = filter;
        }
        if let Some(script) = read_env::<String>("GRID_PICK_SCRIPT") {
            config.pick_script = script;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
