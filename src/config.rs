use ::config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Runtime settings. Layered as defaults < optional `superheroes.toml`
/// < `SUPERHEROES_*` environment < `DATABASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_allow_origin: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5555,
            database_url: "sqlite://superheroes.db".to_string(),
            max_connections: 5,
            cors_allow_origin: "*".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = env::var("SUPERHEROES_CONFIG").unwrap_or_else(|_| "superheroes".to_string());
        Self::load(&path, env::var("DATABASE_URL").ok())
    }

    pub fn load(path: &str, database_url: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let settings = ::config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", defaults.max_connections)?
            .set_default("cors_allow_origin", defaults.cors_allow_origin)?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("SUPERHEROES").try_parsing(true))
            .set_override_option("database_url", database_url)?
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port must be non-zero".to_string()));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::Message("database_url must be set".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Message(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5555);
        assert_eq!(config.database_url, "sqlite://superheroes.db");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_file_and_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("superheroes.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "port = 8080").unwrap();
        writeln!(file, "database_url = \"sqlite://from-file.db\"").unwrap();

        let config = Config::load(
            path.to_str().unwrap(),
            Some("sqlite://override.db".to_string()),
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite://override.db");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_connections() {
        let config = Config {
            max_connections: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
