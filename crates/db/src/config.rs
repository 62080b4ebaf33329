use sqlx::postgres::PgConnectOptions;

use folio_core::config::{env_or, parse_env_or, ConfigError};

/// Database connection settings.
///
/// `DATABASE_URL` wins when set; otherwise the connection is assembled from
/// the individual `DB_*` variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: "postgres".into(),
            database: "postgres".into(),
            max_connections: 10,
        }
    }
}

impl DbConfig {
    /// Load from the environment.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | unset       |
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | `postgres`  |
    /// | `DB_NAME`            | `postgres`  |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env_or("DB_HOST", &defaults.host),
            port: parse_env_or("DB_PORT", defaults.port, "u16")?,
            user: env_or("DB_USER", &defaults.user),
            password: env_or("DB_PASSWORD", &defaults.password),
            database: env_or("DB_NAME", &defaults.database),
            max_connections: parse_env_or(
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
                "u32",
            )?,
        })
    }

    /// Build connect options. Fails only if `url` is set and unparseable.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}
