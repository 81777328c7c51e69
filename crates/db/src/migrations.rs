use sqlx::migrate::{MigrateError, Migrator};

use crate::DbPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Tables the service reads and writes. Used by readiness checks.
pub const MANAGED_TABLES: &[&str] = &["customer", "address"];

pub async fn run_pending(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Names of `MANAGED_TABLES` that are absent from the connected database.
pub async fn missing_tables(pool: &DbPool) -> Result<Vec<&'static str>, sqlx::Error> {
    let mut missing = Vec::new();
    for table in MANAGED_TABLES {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(*table)
        .fetch_one(pool)
        .await?;
        if count == 0 {
            missing.push(*table);
        }
    }
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use sqlx::Row;

    use super::{missing_tables, run_pending, MANAGED_TABLES};
    use crate::{connect_with_settings, migrations::MIGRATOR};

    #[tokio::test]
    async fn migrations_create_customer_and_address_tables() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        assert_eq!(missing_tables(&pool).await.expect("inspect"), MANAGED_TABLES.to_vec());

        run_pending(&pool).await.expect("run migrations");

        assert!(missing_tables(&pool).await.expect("inspect").is_empty());

        let index_count = sqlx::query(
            "SELECT COUNT(*) AS count FROM sqlite_master
             WHERE type = 'index' AND name = 'idx_address_customer_id'",
        )
        .fetch_one(&pool)
        .await
        .expect("check address index")
        .get::<i64, _>("count");
        assert_eq!(index_count, 1);

        pool.close().await;
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");

        run_pending(&pool).await.expect("first run");
        run_pending(&pool).await.expect("second run");

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&pool)
            .await
            .expect("count applied migrations");
        assert_eq!(applied, MIGRATOR.iter().count() as i64);

        pool.close().await;
    }

    #[tokio::test]
    async fn address_table_has_no_foreign_key_to_customer() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        run_pending(&pool).await.expect("run migrations");

        let foreign_keys: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM pragma_foreign_key_list('address')")
                .fetch_one(&pool)
                .await
                .expect("inspect foreign keys");
        assert_eq!(foreign_keys, 0);

        pool.close().await;
    }
}
