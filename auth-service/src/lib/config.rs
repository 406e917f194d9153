use std::env;

use auth::TokenLifetimes;
use chrono::Utc;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    /// Absent means the in-memory user store is used.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
}

/// Longest accepted refresh token lifetime.
pub const MAX_REFRESH_TOKEN_DAYS: i64 = 3650;

impl JwtConfig {
    /// Lifetimes for the token issuer. Only meaningful once `validate` passed.
    pub fn lifetimes(&self) -> TokenLifetimes {
        TokenLifetimes::new(self.access_token_minutes, self.refresh_token_days)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }
        if self.access_token_minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.access_token_minutes must be positive".to_string(),
            ));
        }
        if self.refresh_token_days <= 0 {
            return Err(ConfigError::Message(
                "jwt.refresh_token_days must be positive".to_string(),
            ));
        }
        if self.refresh_token_days > MAX_REFRESH_TOKEN_DAYS {
            return Err(ConfigError::Message(format!(
                "jwt.refresh_token_days must be at most {}",
                MAX_REFRESH_TOKEN_DAYS
            )));
        }

        let lifetimes =
            TokenLifetimes::try_new(self.access_token_minutes, self.refresh_token_days)
                .ok_or_else(|| {
                    ConfigError::Message("jwt token lifetimes are out of range".to_string())
                })?;

        if lifetimes.access >= lifetimes.refresh {
            return Err(ConfigError::Message(
                "jwt access token lifetime must be shorter than the refresh token lifetime"
                    .to_string(),
            ));
        }
        if Utc::now().checked_add_signed(lifetimes.refresh).is_none() {
            return Err(ConfigError::Message(
                "jwt.refresh_token_days pushes token expiry out of range".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// The result is validated before it is returned.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that deserialize but cannot drive the service.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;

        if let Some(database) = &self.database {
            if database.url.is_empty() {
                return Err(ConfigError::Message("database.url must not be empty".to_string()));
            }
        }

        Ok(())
    }
}
