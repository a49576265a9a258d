//! Migrate command - Database migration management.

use sea_orm_migration::MigratorTrait;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Migrator};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Open without auto-migrating; each action drives the migrator itself
    let db = Database::open(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let conn = db.get_connection();

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending migrations");
            Migrator::up(&conn, None).await?;
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back the last migration");
            Migrator::down(&conn, Some(1)).await?;
        }
        MigrateAction::Status => {
            Migrator::status(&conn).await?;
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-applying every migration");
            Migrator::fresh(&conn).await?;
        }
    }

    Ok(())
}
