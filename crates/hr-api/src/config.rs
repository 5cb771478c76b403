use clap::Parser;
use thiserror::Error;

pub const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;
pub const DEFAULT_MAX_POOL_SIZE: usize = 5000;

#[derive(Debug, Clone, Parser)]
#[command(name = "hr-api", about = "HTTP API for HR team formation")]
pub struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "HR_CORS_ORIGINS", default_value = "http://localhost:3000")]
    pub cors_origins: String,

    /// Largest employee pool accepted in a single request
    #[arg(long, env = "HR_MAX_POOL_SIZE", default_value_t = DEFAULT_MAX_POOL_SIZE)]
    pub max_pool_size: usize,

    /// Request body limit in bytes
    #[arg(long, env = "HR_BODY_LIMIT_BYTES", default_value_t = DEFAULT_BODY_LIMIT_BYTES)]
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("HR_CORS_ORIGINS must list explicit origins, not `*`")]
    WildcardOrigin,
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_pool_size: usize,
    pub body_limit_bytes: usize,
}

impl TryFrom<Cli> for AppConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let cors_origins: Vec<String> = cli
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(ConfigError::WildcardOrigin);
        }
        if cli.max_pool_size == 0 {
            return Err(ConfigError::NotPositive("HR_MAX_POOL_SIZE"));
        }
        if cli.body_limit_bytes == 0 {
            return Err(ConfigError::NotPositive("HR_BODY_LIMIT_BYTES"));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
            max_pool_size: cli.max_pool_size,
            body_limit_bytes: cli.body_limit_bytes,
        })
    }
}

impl AppConfig {
    pub fn for_tests() -> Self {
        Self {
            port: 3001,
            cors_origins: vec!["http://localhost:3000".into()],
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, ConfigError> {
        let cli = Cli::try_parse_from(["hr-api"].into_iter().chain(args.iter().copied())).unwrap();
        AppConfig::try_from(cli)
    }

    #[test]
    fn splits_and_trims_origins() {
        let config = parse(&[
            "--cors-origins",
            "http://localhost:3000, ,https://hr.example.com",
            "--port",
            "8080",
            "--max-pool-size",
            "250",
            "--body-limit-bytes",
            "65536",
        ])
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://hr.example.com"]
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_pool_size, 250);
        assert_eq!(config.body_limit_bytes, 65536);
    }

    #[test]
    fn rejects_wildcard_and_zero_limits() {
        assert_eq!(
            parse(&["--cors-origins", "https://a.example, *"]).unwrap_err(),
            ConfigError::WildcardOrigin
        );
        assert_eq!(
            parse(&["--max-pool-size", "0"]).unwrap_err(),
            ConfigError::NotPositive("HR_MAX_POOL_SIZE")
        );
        assert_eq!(
            parse(&["--body-limit-bytes", "0"]).unwrap_err(),
            ConfigError::NotPositive("HR_BODY_LIMIT_BYTES")
        );
    }
}
