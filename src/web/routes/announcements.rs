use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::AnnouncementRow;
use crate::services::announcements_service::{self, AnnouncementUpdate, NewAnnouncement};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn list_announcements_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnouncementRow>>, AppError> {
    announcements_service::list(&state.pool).await.map(Json)
}

pub async fn create_announcement_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<NewAnnouncement>,
) -> Result<Json<AnnouncementRow>, AppError> {
    let created = announcements_service::create(&state.pool, body).await?;
    tracing::info!(user = %user.username, id = %created.id, "announcement created");
    Ok(Json(created))
}

pub async fn update_announcement_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(body): Json<AnnouncementUpdate>,
) -> Result<Json<AnnouncementRow>, AppError> {
    let updated = announcements_service::update(&state.pool, &id, body).await?;
    tracing::info!(user = %user.username, id = %id, "announcement updated");
    Ok(Json(updated))
}

pub async fn delete_announcement_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    announcements_service::delete(&state.pool, &id).await?;
    tracing::info!(user = %user.username, id = %id, "announcement deleted");
    Ok(Json(json!({ "message": "Announcement deleted" })))
}
