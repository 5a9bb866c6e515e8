use serde::Deserialize;
use std::env;
use volara_core::cabin::CabinLayout;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cabin: CabinLayout,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
    pub admin_jwt_expiration_seconds: u64,
}

impl Config {
    /// Layered load: config/default.toml, then an optional RUN_MODE file,
    /// then an optional local file, then VOLARA__* environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("VOLARA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            [server]
            port = 5000

            [database]
            url = "postgres://localhost/volara"

            [auth]
            jwt_secret = "secret"
            jwt_expiration_seconds = 86400
            admin_jwt_expiration_seconds = 604800

            [cabin]
            total_seats = 60
            seats_per_row = 6
        "#;

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.cabin.total_seats, 60);
        assert_eq!(cfg.cabin.seats_per_row, 6);
        assert_eq!(cfg.auth.admin_jwt_expiration_seconds, 604800);
    }
}
