use sqlx::SqlitePool;

use crate::database::{activities_repo, teachers_repo};
use crate::error::AppError;

/// Adds a student to an activity roster. The caller must name an existing
/// teacher; duplicates are rejected by a pre-check rather than a constraint.
pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
    teacher_username: Option<&str>,
) -> Result<String, AppError> {
    let teacher = require_teacher(pool, teacher_username).await?;

    activities_repo::find_activity(pool, activity_name)
        .await?
        .ok_or(AppError::NotFound("Activity"))?;

    if activities_repo::participant_exists(pool, activity_name, email).await? {
        return Err(AppError::AlreadySignedUp);
    }

    if activities_repo::insert_participant(pool, activity_name, email).await? == 0 {
        return Err(AppError::WriteFailed("activity"));
    }

    tracing::info!(activity = %activity_name, email = %email, teacher = %teacher, "signup");
    Ok(format!("Signed up {email} for {activity_name}"))
}

/// Removes a student from an activity roster; the inverse transition of
/// [`signup`] with the same teacher precondition.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
    teacher_username: Option<&str>,
) -> Result<String, AppError> {
    let teacher = require_teacher(pool, teacher_username).await?;

    activities_repo::find_activity(pool, activity_name)
        .await?
        .ok_or(AppError::NotFound("Activity"))?;

    if !activities_repo::participant_exists(pool, activity_name, email).await? {
        return Err(AppError::NotRegistered);
    }

    if activities_repo::delete_participant(pool, activity_name, email).await? == 0 {
        return Err(AppError::WriteFailed("activity"));
    }

    tracing::info!(activity = %activity_name, email = %email, teacher = %teacher, "unregister");
    Ok(format!("Unregistered {email} from {activity_name}"))
}

async fn require_teacher(
    pool: &SqlitePool,
    teacher_username: Option<&str>,
) -> Result<String, AppError> {
    let username = teacher_username
        .filter(|s| !s.is_empty())
        .ok_or(AppError::TeacherRequired)?;

    let teacher = teachers_repo::find_teacher(pool, username)
        .await?
        .ok_or(AppError::InvalidTeacher)?;

    Ok(teacher.username)
}
