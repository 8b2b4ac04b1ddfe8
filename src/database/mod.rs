use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub mod activities_repo;
pub mod announcements_repo;
pub mod seed;
pub mod teachers_repo;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  name TEXT PRIMARY KEY,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  days TEXT NOT NULL,
  start_time TEXT NOT NULL,
  end_time TEXT NOT NULL,
  max_participants INTEGER NOT NULL
);

-- Signup order matters (rowid), and duplicate prevention is a service-level
-- pre-check, so no UNIQUE(activity_name, email) here.
CREATE TABLE IF NOT EXISTS activity_participants (
  activity_name TEXT NOT NULL,
  email TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS teachers (
  username TEXT PRIMARY KEY,
  display_name TEXT NOT NULL,
  role TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS announcements (
  id TEXT PRIMARY KEY,
  message TEXT NOT NULL,
  start_date TEXT,
  expiration_date TEXT NOT NULL
);
"#;

pub async fn connect(database_url: &str) -> sqlx::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new().connect(database_url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    // A pooled ":memory:" database is per-connection, so pin the pool to one.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
