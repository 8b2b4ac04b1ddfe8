use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::announcements_repo;
use crate::error::AppError;
use crate::models::AnnouncementRow;

/// Create body. Required fields are optional here so a missing field becomes
/// our own 400 instead of a rejected deserialization.
#[derive(Debug, Deserialize)]
pub struct NewAnnouncement {
    pub message: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
}

/// Partial update body; absent fields keep their stored value.
#[derive(Debug, Deserialize, Default)]
pub struct AnnouncementUpdate {
    pub message: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<AnnouncementRow>, AppError> {
    Ok(announcements_repo::list_announcements(pool).await?)
}

pub async fn create(pool: &SqlitePool, body: NewAnnouncement) -> Result<AnnouncementRow, AppError> {
    let message = body.message.as_deref().filter(|s| !s.is_empty());
    let expiration_date = body.expiration_date.as_deref().filter(|s| !s.is_empty());

    let (Some(message), Some(expiration_date)) = (message, expiration_date) else {
        return Err(AppError::Validation(
            "Message and expiration_date required".to_string(),
        ));
    };

    let id = Uuid::new_v4().to_string();
    announcements_repo::insert_announcement(
        pool,
        &id,
        message,
        body.start_date.as_deref(),
        expiration_date,
    )
    .await?;

    Ok(AnnouncementRow {
        id,
        message: message.to_string(),
        start_date: body.start_date.clone(),
        expiration_date: expiration_date.to_string(),
    })
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    update: AnnouncementUpdate,
) -> Result<AnnouncementRow, AppError> {
    let matched = announcements_repo::update_announcement(
        pool,
        id,
        update.message.as_deref(),
        update.start_date.as_deref(),
        update.expiration_date.as_deref(),
    )
    .await?;

    if matched == 0 {
        return Err(AppError::NotFound("Announcement"));
    }

    announcements_repo::find_announcement(pool, id)
        .await?
        .ok_or(AppError::NotFound("Announcement"))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> Result<(), AppError> {
    // Reject structurally invalid ids before touching the store.
    Uuid::parse_str(id)
        .map_err(|_| AppError::Validation("Invalid announcement ID format".to_string()))?;

    if announcements_repo::delete_announcement(pool, id).await? == 0 {
        return Err(AppError::NotFound("Announcement"));
    }

    Ok(())
}
