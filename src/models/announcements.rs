use serde::Serialize;

/// Announcement row; `id` is a uuid string assigned on insert and is the
/// shape we serve directly.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AnnouncementRow {
    pub id: String,
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
}
