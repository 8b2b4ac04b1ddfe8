use sqlx::SqlitePool;

use crate::models::TeacherRow;

const SQL_FIND_TEACHER: &str = r#"
SELECT username, display_name, role
FROM teachers
WHERE username = ?
"#;

pub async fn find_teacher(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<TeacherRow>> {
    sqlx::query_as::<_, TeacherRow>(SQL_FIND_TEACHER)
        .bind(username)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_TEACHER: &str = r#"
INSERT INTO teachers (username, display_name, role) VALUES (?, ?, ?)
"#;

pub async fn insert_teacher(
    pool: &SqlitePool,
    username: &str,
    display_name: &str,
    role: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_TEACHER)
        .bind(username)
        .bind(display_name)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
