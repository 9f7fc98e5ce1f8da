use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::config::ConfigError, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured `LOG_LEVEL` is used as the filter.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(ConfigError::LogFilter)` - `LOG_LEVEL` is not a valid filter directive
/// - `Err(ConfigError::Subscriber)` - A global subscriber was already set
pub fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|source| {
            ConfigError::LogFilter {
                value: config.log_level.clone(),
                source,
            }
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| ConfigError::Subscriber(e.to_string()))
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready at {}", config.database_url);
    Ok(db)
}
