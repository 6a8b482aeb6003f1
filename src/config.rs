use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3001;

pub struct Config {
    pub database_url: String,
    pub app_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_port = match std::env::var("APP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("APP_PORT".to_string(), value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_port,
        })
    }
}
