mod game_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

use game_config::GameConfig;

pub use main_config::{Config, get_config_manager};
