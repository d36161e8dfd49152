pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::TicTacToeSettings;
use tictactoe_common::logger::LogLevel;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: TicTacToeSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub use_prefix: bool,
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::FirstPlayerMode;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let config = Config {
            game: TicTacToeSettings {
                board_size: 7,
                first_player: FirstPlayerMode::Random,
            },
            logging: LoggingConfig {
                use_prefix: true,
                level: LogLevel::Debug,
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        manager.invalidate().unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        let loaded = manager.get_config().unwrap();
        assert_eq!(loaded, Config::default());
        assert_eq!(loaded.game.board_size, 3);
        assert_eq!(loaded.game.first_player, FirstPlayerMode::X);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("game:\n  board_size: 5\n").unwrap();
        assert_eq!(config.game.board_size, 5);
        assert_eq!(config.game.first_player, FirstPlayerMode::X);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_partial_logging_section_fills_missing_fields() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("game:\n  board_size: 5\nlogging:\n  use_prefix: true\n")
            .unwrap();
        assert!(config.logging.use_prefix);
        assert_eq!(config.logging.level, LogLevel::Info);

        let config: Config = serializer
            .deserialize("game:\n  board_size: 3\nlogging:\n  level: Warn\n")
            .unwrap();
        assert!(!config.logging.use_prefix);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_unsupported_board_size_cant_be_read() {
        let content = r#"
            game:
              board_size: 4
              first_player: O
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(content).unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }
}
