// Teacher records are only ever existence-checked; no password handling here.
#[allow(dead_code)]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeacherRow {
    pub username: String,
    pub display_name: String,
    pub role: String,
}
