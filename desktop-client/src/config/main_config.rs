use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tic_tac_toe_config.yaml";

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}
