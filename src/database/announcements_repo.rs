use sqlx::SqlitePool;

use crate::models::AnnouncementRow;

const SQL_LIST_ANNOUNCEMENTS: &str = r#"
SELECT id, message, start_date, expiration_date
FROM announcements
ORDER BY rowid
"#;

pub async fn list_announcements(pool: &SqlitePool) -> sqlx::Result<Vec<AnnouncementRow>> {
    sqlx::query_as::<_, AnnouncementRow>(SQL_LIST_ANNOUNCEMENTS)
        .fetch_all(pool)
        .await
}

const SQL_FIND_ANNOUNCEMENT: &str = r#"
SELECT id, message, start_date, expiration_date
FROM announcements
WHERE id = ?
"#;

pub async fn find_announcement(
    pool: &SqlitePool,
    id: &str,
) -> sqlx::Result<Option<AnnouncementRow>> {
    sqlx::query_as::<_, AnnouncementRow>(SQL_FIND_ANNOUNCEMENT)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_ANNOUNCEMENT: &str = r#"
INSERT INTO announcements (id, message, start_date, expiration_date)
VALUES (?, ?, ?, ?)
"#;

pub async fn insert_announcement(
    pool: &SqlitePool,
    id: &str,
    message: &str,
    start_date: Option<&str>,
    expiration_date: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ANNOUNCEMENT)
        .bind(id)
        .bind(message)
        .bind(start_date)
        .bind(expiration_date)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

// COALESCE keeps the stored value wherever the caller supplied no field,
// giving merge-style partial updates.
const SQL_UPDATE_ANNOUNCEMENT: &str = r#"
UPDATE announcements
SET message = COALESCE(?, message),
    start_date = COALESCE(?, start_date),
    expiration_date = COALESCE(?, expiration_date)
WHERE id = ?
"#;

pub async fn update_announcement(
    pool: &SqlitePool,
    id: &str,
    message: Option<&str>,
    start_date: Option<&str>,
    expiration_date: Option<&str>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_ANNOUNCEMENT)
        .bind(message)
        .bind(start_date)
        .bind(expiration_date)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_ANNOUNCEMENT: &str = r#"
DELETE FROM announcements WHERE id = ?
"#;

pub async fn delete_announcement(pool: &SqlitePool, id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ANNOUNCEMENT)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
