use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_ttl_secs")]
    pub access_token_ttl_secs: i64,
    #[serde(default = "default_refresh_token_ttl_secs")]
    pub refresh_token_ttl_secs: i64,
    #[serde(default)]
    pub gate_policy: GatePolicy,
}

/// Which token types the access gate accepts on protected routes.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GatePolicy {
    /// Any token with a valid signature and expiry, access or refresh.
    #[default]
    AnyValidToken,
    /// Only tokens with `type = access`.
    AccessTokenOnly,
}

fn default_max_connections() -> u32 {
    5
}

fn default_access_token_ttl_secs() -> i64 {
    60 * 60
}

fn default_refresh_token_ttl_secs() -> i64 {
    7 * 24 * 60 * 60
}

/// Upper bound for either token lifetime: ten years.
const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

impl JwtConfig {
    pub fn token_lifetimes(&self) -> auth::TokenLifetimes {
        auth::TokenLifetimes::from_secs(self.access_token_ttl_secs, self.refresh_token_ttl_secs)
    }

    /// Rejects lifetimes that would issue already-expired tokens or overflow
    /// the expiry timestamp.
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, secs) in [
            ("jwt.access_token_ttl_secs", self.access_token_ttl_secs),
            ("jwt.refresh_token_ttl_secs", self.refresh_token_ttl_secs),
        ] {
            if !(1..=MAX_TOKEN_TTL_SECS).contains(&secs) {
                return Err(ConfigError::Message(format!(
                    "{} must be between 1 and {}, got {}",
                    key, MAX_TOKEN_TTL_SECS, secs
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment)
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.jwt.validate()?;

        Ok(config)
    }
}

/// Unprefixed `SECTION__KEY` variables, e.g. `JWT__SECRET` or
/// `SERVER__CORS_ORIGINS=http://localhost:3001,http://localhost:3000`.
fn environment() -> Environment {
    Environment::default()
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.cors_origins")
}

#[cfg(test)]
mod tests {
    use config::FileFormat;
    use config::Map;

    use super::*;

    fn from_toml(source: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_applied() {
        let config = from_toml(
            r#"
            [database]
            url = "postgres://localhost/volunteers"

            [server]
            http_port = 5000

            [jwt]
            secret = "secret"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.database.max_connections, 5);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.jwt.access_token_ttl_secs, 3600);
        assert_eq!(config.jwt.refresh_token_ttl_secs, 604800);
        assert_eq!(config.jwt.gate_policy, GatePolicy::AnyValidToken);
        assert_eq!(config.jwt.token_lifetimes(), auth::TokenLifetimes::default());
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            r#"
            [database]
            url = "postgres://localhost/volunteers"
            max_connections = 12

            [server]
            http_port = 8080
            cors_origins = ["http://localhost:3001"]

            [jwt]
            secret = "secret"
            access_token_ttl_secs = 900
            refresh_token_ttl_secs = 86400
            gate_policy = "access_token_only"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3001"]);
        assert_eq!(config.jwt.gate_policy, GatePolicy::AccessTokenOnly);
        assert_eq!(
            config.jwt.token_lifetimes(),
            auth::TokenLifetimes::from_secs(900, 86400)
        );
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = from_toml(
            r#"
            [database]
            url = "postgres://localhost/volunteers"

            [server]
            http_port = 5000

            [jwt]
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_environment_overrides_files() {
        let variables = Map::from([
            ("JWT__SECRET".to_string(), "secret-from-env".to_string()),
            ("SERVER__HTTP_PORT".to_string(), "6123".to_string()),
            (
                "SERVER__CORS_ORIGINS".to_string(),
                "http://a.example,http://b.example".to_string(),
            ),
            (
                "DATABASE__URL".to_string(),
                "postgres://db.internal/volunteers".to_string(),
            ),
        ]);

        let config = Config::load_with(environment().source(Some(variables)))
            .expect("Failed to load config");

        assert_eq!(config.jwt.secret, "secret-from-env");
        assert_eq!(config.server.http_port, 6123);
        assert_eq!(
            config.server.cors_origins,
            vec!["http://a.example", "http://b.example"]
        );
        assert_eq!(config.database.url, "postgres://db.internal/volunteers");
    }

    #[test]
    fn test_token_lifetimes_must_be_positive_and_bounded() {
        let with_ttls = |access: i64, refresh: i64| {
            from_toml(&format!(
                r#"
                [database]
                url = "postgres://localhost/volunteers"

                [server]
                http_port = 5000

                [jwt]
                secret = "secret"
                access_token_ttl_secs = {access}
                refresh_token_ttl_secs = {refresh}
                "#
            ))
            .expect("Failed to load config")
        };

        assert!(with_ttls(900, 86400).jwt.validate().is_ok());
        assert!(with_ttls(0, 86400).jwt.validate().is_err());
        assert!(with_ttls(-60, 86400).jwt.validate().is_err());
        assert!(with_ttls(900, i64::MAX).jwt.validate().is_err());
    }

    #[test]
    fn test_load_rejects_negative_ttl_from_environment() {
        let variables = Map::from([(
            "JWT__ACCESS_TOKEN_TTL_SECS".to_string(),
            "-1".to_string(),
        )]);

        let result = Config::load_with(environment().source(Some(variables)));

        assert!(result.is_err());
    }
}
