mod game_config;
mod main_config;
mod theme;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub use game_config::GameConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
pub use theme::Theme;
