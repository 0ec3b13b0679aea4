use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::env;

/// Set up a migrated test database connection
/// Uses TEST_DATABASE_URL environment variable or falls back to a private
/// in-memory SQLite database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    // A single pooled connection keeps the in-memory database alive across
    // the whole test.
    let mut options = ConnectOptions::new(database_url);
    options.max_connections(1);

    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        assert!(db.is_ok(), "Test database connection should succeed");
    }
}
