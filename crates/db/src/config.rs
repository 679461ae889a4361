use crate::error::DbError;

/// Database configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string (required).
    pub database_url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
    /// Seconds to wait for a free connection (default: `5`).
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, DbError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default    |
    /// |---------------------------|------------|
    /// | `DATABASE_URL`            | (required) |
    /// | `DB_MAX_CONNECTIONS`      | `20`       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`        |
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DbError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| DbError::Config("DATABASE_URL must be set".into()))?;

        let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?;
        if max_connections == 0 {
            return Err(DbError::Config(
                "DB_MAX_CONNECTIONS must be greater than zero".into(),
            ));
        }
        let acquire_timeout_secs: u64 = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?;

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, DbError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DbError::Config(format!("{key} must be a valid number, got '{raw}'"))),
    }
}
