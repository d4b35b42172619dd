use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "contractor_board.toml";
pub const ENV_PREFIX: &str = "CONTRACTOR_BOARD_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// CSV file loaded once at startup
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Worker threads; actix picks one per core when unset
    pub workers: Option<usize>,
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub log_level: String,
    pub delimiter: char,
    pub trim: bool,
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("contrator.csv"),
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: None,
            log_level: "info".to_string(),
            delimiter: ',',
            trim: true,
            cors_permissive: true,
        }
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Defaults, then `contractor_board.toml`, then `CONTRACTOR_BOARD_*`
    pub fn load() -> Result<ServerConfig> {
        let _ = dotenvy::dotenv();
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(config_file: &Path) -> Result<ServerConfig> {
        let config: ServerConfig = Self::figment(config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(AppError::ConfigError("data_path must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(AppError::ConfigError("port must be > 0".to_string()));
        }
        if self.workers == Some(0) {
            return Err(AppError::ConfigError("workers must be > 0".to_string()));
        }
        if !self.delimiter.is_ascii() {
            return Err(AppError::ConfigError(format!(
                "delimiter must be a single-byte character, got {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::load_from(Path::new(CONFIG_FILE)).unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.data_path, PathBuf::from("contrator.csv"));
            assert_eq!(config.bind_addr(), "127.0.0.1:5000");
            Ok(())
        });
    }

    #[test]
    fn test_toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    data_path = "data/contractors.csv"
                    port = 8080
                    delimiter = ";"
                "#,
            )?;
            jail.set_env("CONTRACTOR_BOARD_PORT", "9090");
            jail.set_env("CONTRACTOR_BOARD_LOG_LEVEL", "debug");

            let config = ConfigService::load_from(Path::new(CONFIG_FILE)).unwrap();
            assert_eq!(config.data_path, PathBuf::from("data/contractors.csv"));
            assert_eq!(config.port, 9090);
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.delimiter_byte(), b';');
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::ConfigError(_))));

        let config = ServerConfig {
            workers: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            delimiter: '§',
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
