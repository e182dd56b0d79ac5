use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, GameConfig, Theme, Validate, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub theme: Theme,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}
