use std::path::PathBuf;

use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, GameConfig, LoggingConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "gomoku_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::gomoku::{BotType, GameMode, Player};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_gomoku_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            game: GameConfig {
                board_size: 20,
                mode: GameMode::PlayerVsBot,
                human_side: Player::Second,
                bot: BotType::Blocker,
                bot_delay_ms: 250,
            },
            logging: LoggingConfig {
                prefix: Some("Gomoku".to_string()),
                file: None,
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_non_preset_board_size_cant_be_read() {
        let content = r#"
            game:
              board_size: 12
              mode: TwoPlayer
              human_side: First
              bot: FirstEmpty
              bot_delay_ms: 500
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_section_cant_be_read() {
        let content = r#"
            logging:
              prefix: Gomoku
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_to_settings_carries_every_field() {
        let game = GameConfig {
            board_size: 10,
            mode: GameMode::PlayerVsBot,
            human_side: Player::Second,
            bot: BotType::Blocker,
            bot_delay_ms: 0,
        };
        let settings = game.to_settings();
        assert_eq!(settings.board_size, 10);
        assert_eq!(settings.mode, GameMode::PlayerVsBot);
        assert_eq!(settings.human_side, Player::Second);
        assert_eq!(settings.bot, BotType::Blocker);
    }
}
