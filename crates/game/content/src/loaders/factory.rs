//! Content factory for loading match content from a data directory.

use std::path::{Path, PathBuf};

use duel_core::{GameConfig, GameState};

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};

/// Loads all match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenarios/
///     ├── chain.ron
///     └── kick_duel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load `scenarios/{name}.ron` into a match state.
    pub fn load_scenario(&self, name: &str) -> LoadResult<GameState> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
