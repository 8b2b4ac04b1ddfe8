use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_LIST_FILTERED: &str = r#"
SELECT
  a.name,
  a.description,
  a.schedule,
  a.days,
  a.start_time,
  a.end_time,
  a.max_participants,
  (
    SELECT group_concat(email, char(10))
    FROM (
      SELECT ap.email
      FROM activity_participants ap
      WHERE ap.activity_name = a.name
      ORDER BY ap.rowid
    )
  ) AS participants
FROM activities a
WHERE (?1 IS NULL OR EXISTS (
        SELECT 1 FROM json_each(a.days) WHERE json_each.value = ?1
      ))
  AND (?2 IS NULL OR a.start_time >= ?2)
  AND (?3 IS NULL OR a.end_time <= ?3)
ORDER BY a.name
"#;

/// Nullable binds stand in for absent filters, so one statement covers every
/// day/start_time/end_time combination.
pub async fn list_activities(
    pool: &SqlitePool,
    day: Option<&str>,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_FILTERED)
        .bind(day)
        .bind(start_time)
        .bind(end_time)
        .fetch_all(pool)
        .await
}

const SQL_FIND_ACTIVITY: &str = r#"
SELECT
  a.name,
  a.description,
  a.schedule,
  a.days,
  a.start_time,
  a.end_time,
  a.max_participants,
  (
    SELECT group_concat(email, char(10))
    FROM (
      SELECT ap.email
      FROM activity_participants ap
      WHERE ap.activity_name = a.name
      ORDER BY ap.rowid
    )
  ) AS participants
FROM activities a
WHERE a.name = ?
"#;

pub async fn find_activity(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_ACTIVITY)
        .bind(name)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_DAYS: &str = r#"
SELECT DISTINCT j.value
FROM activities a, json_each(a.days) j
ORDER BY j.value
"#;

pub async fn list_days(pool: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(SQL_LIST_DAYS)
        .fetch_all(pool)
        .await
}

const SQL_PARTICIPANT_EXISTS: &str = r#"
SELECT EXISTS (
  SELECT 1 FROM activity_participants
  WHERE activity_name = ? AND email = ?
)
"#;

pub async fn participant_exists(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<bool> {
    sqlx::query_scalar::<_, bool>(SQL_PARTICIPANT_EXISTS)
        .bind(activity_name)
        .bind(email)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (activity_name, email) VALUES (?, ?)
"#;

pub async fn insert_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants WHERE activity_name = ? AND email = ?
"#;

pub async fn delete_participant(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_name)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  days,
  start_time,
  end_time,
  max_participants
) VALUES (?, ?, ?, ?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub days: &'a str, // JSON array of day names
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub max_participants: i64,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.days)
        .bind(activity.start_time)
        .bind(activity.end_time)
        .bind(activity.max_participants)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_COUNT_ACTIVITIES: &str = "SELECT count(*) FROM activities";

pub async fn count_activities(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ACTIVITIES)
        .fetch_one(pool)
        .await
}
