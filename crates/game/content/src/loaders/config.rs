//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use farm_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_RULES: &str = include_str!("../../data/rules.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    ///
    /// Sections missing from the file keep their built-in values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Serialize a config back to TOML.
    pub fn to_toml(config: &GameConfig) -> LoadResult<String> {
        toml::to_string_pretty(config).context("Failed to serialize config TOML")
    }

    /// The rules shipped with the crate.
    pub fn embedded() -> LoadResult<GameConfig> {
        Self::parse(EMBEDDED_RULES).context("embedded rules.toml")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use farm_core::{Duration, ItemName, ResourceNodeKind};

    use super::*;

    #[test]
    fn embedded_rules_match_built_in_defaults() {
        let config = ConfigLoader::embedded().expect("embedded rules parse");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_listed_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[gold]\nrecovery = 60000\nregenerated_amount = 5\nboost_fraction = 0.25\n\n[build_durations]\nGnome = 1000"
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        let gold = config.node_rules(ResourceNodeKind::Gold);
        assert_eq!(gold.recovery, Duration::from_minutes(1));
        assert_eq!(gold.boost_offset(), Duration::from_secs(15));
        assert_eq!(config.stone, GameConfig::default().stone);
        assert_eq!(config.build_duration(ItemName::Gnome), Duration::from_secs(1));
        // A listed table replaces the default one wholesale.
        assert_eq!(config.build_duration(ItemName::Observatory), Duration::ZERO);
    }

    #[test]
    fn unknown_item_names_are_rejected() {
        let error = ConfigLoader::parse("[build_durations]\nCastle = 10").unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn serialized_rules_parse_back() {
        let mut config = GameConfig::default();
        config.tree.recovery = Duration::from_minutes(90);

        let text = ConfigLoader::to_toml(&config).unwrap();
        assert_eq!(ConfigLoader::parse(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_path() {
        let error = ConfigLoader::load(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/rules.toml"));
    }
}
