//! Game configuration loader.

use std::path::Path;

use duel_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file. Missing keys keep their
    /// defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use duel_core::Position;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("seed = 42\nboard_size = 9\n").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.board_size, 9);
        assert_eq!(config.soft_wall_ratio, GameConfig::DEFAULT_SOFT_WALL_RATIO);
        assert_eq!(config.p2_spawn(), Position::new(7, 7));
    }

    #[test]
    fn reads_spawn_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "soft_wall_ratio = 0.0").unwrap();
        writeln!(file, "[p1_spawn]\nx = 1\ny = 5").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.p1_spawn(), Position::new(1, 5));
        assert_eq!(config.soft_wall_ratio, 0.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(ConfigLoader::parse("board_size = \"seven\"").is_err());
    }
}
