
/// Entity CRUD and relation tests
pub mod crud_tests;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Fresh in-memory SQLite database with the full schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
