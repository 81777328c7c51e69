use rolodex_core::config::AppConfig;
use rolodex_db::{connect_with_settings, migrations, DbPool};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let db_pool = connect_with_settings(
        &config.database.url,
        config.database.max_connections,
        config.database.timeout_secs,
    )
    .await
    .map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        max_connections = config.database.max_connections,
        "database connection established"
    );

    if config.database.run_migrations {
        migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
        info!(event_name = "system.bootstrap.migrations_applied", "database migrations applied");
    } else {
        info!(
            event_name = "system.bootstrap.migrations_skipped",
            "automatic migrations disabled; run `rolodex migrate` before serving"
        );
    }

    Ok(Application { config, db_pool })
}
