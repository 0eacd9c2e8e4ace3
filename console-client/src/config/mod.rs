mod game_config;
mod logging_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use game_config::GameConfig;
pub use logging_config::LoggingConfig;
pub use main_config::{Config, default_config_path, get_config_manager};
