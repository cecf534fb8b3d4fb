use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod instructors;
pub mod topics;
pub mod weeks;

/// Canonical table names, so callers and tests never hardcode them.
pub const INSTRUCTOR_TABLE_NAME: &str = "instructor";
pub const WEEK_TABLE_NAME: &str = "week";
pub const TOPIC_TABLE_NAME: &str = "topic";

/// Opens the connection pool. Foreign-key enforcement is switched on for
/// every connection; the schema relies on it.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
