use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use std::time::Duration;

/// Connection pool against the external TiDB/MySQL store. The schema is
/// owned by out-of-scope content-management and generation processes;
/// this service never migrates or writes it.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
