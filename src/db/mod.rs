use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type Db = Pool<Sqlite>;

// Create connection pool, creating the database file if it does not exist yet
pub async fn create_pool(url: &str) -> Result<Db, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await?;
    tracing::info!(%url, "connected to database");
    Ok(pool)
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS waitlist (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS waitlist_created_at ON waitlist (created_at)")
        .execute(db)
        .await?;
    Ok(())
}

// Waitlist queries
pub async fn insert_signup(
    db: &Db,
    id: &str,
    email: &str,
    created_at: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO waitlist (id, email, created_at) VALUES (?, ?, ?)")
        .bind(id)
        .bind(email)
        .bind(created_at)
        .execute(db)
        .await?;
    Ok(())
}
