//! Database connection module for the clinic gateway
//!
//! Connection parameters come from the `DB_*` environment variables. The
//! pool is created once at startup and handed to the repositories; it is
//! never stored in a global.

use std::env;
use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection};
use tracing::info;

use super::DatabaseError;

/// Upper bound on pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a query waits for a pooled connection before failing.
///
/// sqlx keeps retrying a refused connection until this deadline, so it also
/// bounds how long a request takes to fail while the database is down.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Database configuration
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database server host name
    pub host: String,
    /// User to authenticate as
    pub user: String,
    /// Password for `user`
    pub password: String,
    /// Schema holding the patients and providers tables
    pub database: String,
    /// Database server port
    pub port: u16,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Deadline for checking a connection out of the pool
    pub acquire_timeout: Duration,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| DatabaseError::EnvVarNotFound(key.to_string()));

        let host = required("DB_HOST")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;
        let database = required("DB_NAME")?;

        let port_str = required("DB_PORT")?;
        let port = port_str.trim().parse::<u16>().map_err(|_| DatabaseError::InvalidPort {
            var: "DB_PORT".to_string(),
            value: port_str.clone(),
        })?;

        let config = DatabaseConfig {
            host,
            user,
            password,
            database,
            port,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        };

        info!(
            "Database configuration: host={}, port={}, database={}, user={}, max_connections={}",
            config.host, config.port, config.database, config.user, config.max_connections
        );

        Ok(config)
    }

    /// Connection options for the MySQL driver
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Create the MySQL connection pool.
///
/// The pool connects lazily, so building it never fails; connection errors
/// surface on the first checkout instead, after at most `acquire_timeout`.
/// Must be called from within a tokio runtime.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    info!("Initializing MySQL connection pool for {}:{}", config.host, config.port);

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}

/// Open a single connection with the pool's settings and close it again.
///
/// Goes straight to the driver instead of through the pool, so a refused or
/// rejected connection is reported with its cause on the first attempt.
pub async fn check_connection(config: &DatabaseConfig) -> Result<(), DatabaseError> {
    let conn = config.connect_options().connect().await?;
    conn.close().await?;
    Ok(())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn full_env() -> HashMap<String, String> {
        vars(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "clinic"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "clinic"),
            ("DB_PORT", "3306"),
        ])
    }

    #[test]
    fn test_database_config_from_lookup() {
        let env = full_env();
        let config = DatabaseConfig::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.user, "clinic");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.database, "clinic");
        assert_eq!(config.port, 3306);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.acquire_timeout, DEFAULT_ACQUIRE_TIMEOUT);
    }

    #[test]
    fn test_missing_variable_is_reported() {
        let mut env = full_env();
        env.remove("DB_NAME");

        let err = DatabaseConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, DatabaseError::EnvVarNotFound(ref var) if var == "DB_NAME"));
    }

    #[test]
    fn test_empty_password_is_allowed() {
        let mut env = full_env();
        env.insert("DB_PASSWORD".to_string(), String::new());

        let config = DatabaseConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_invalid_port() {
        let mut env = full_env();
        env.insert("DB_PORT".to_string(), "mysql".to_string());

        let err = DatabaseConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidPort { ref value, .. } if value == "mysql"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let env = full_env();
        let config = DatabaseConfig::from_lookup(|k| env.get(k).cloned()).unwrap();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }

    // Nothing listens on port 1, so every connect is refused at once
    pub fn unreachable_config() -> DatabaseConfig {
        let mut env = full_env();
        env.insert("DB_HOST".to_string(), "127.0.0.1".to_string());
        env.insert("DB_PORT".to_string(), "1".to_string());
        DatabaseConfig::from_lookup(|k| env.get(k).cloned()).unwrap()
    }

    #[tokio::test]
    async fn test_check_connection_reports_refusal_immediately() {
        let config = unreachable_config();

        let started = std::time::Instant::now();
        let err = check_connection(&config).await.unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(1), "took {:?}", started.elapsed());
        assert!(
            matches!(err, DatabaseError::ConnectionError(sqlx::Error::Io(_))),
            "unexpected error: {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_pool_checkout_gives_up_after_acquire_timeout() {
        let config = unreachable_config();
        let pool = create_pool(&config);

        let started = std::time::Instant::now();
        let err = pool.acquire().await.unwrap_err();

        assert!(matches!(err, sqlx::Error::PoolTimedOut), "unexpected error: {:?}", err);
        assert!(
            started.elapsed() < DEFAULT_ACQUIRE_TIMEOUT + Duration::from_secs(2),
            "took {:?}",
            started.elapsed()
        );
    }
}
