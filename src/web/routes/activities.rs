use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::ActivityDetails;
use crate::services::activities_service::{self, ActivitiesQuery};
use crate::services::signup_service;
use crate::state::AppState;

pub async fn list_activities_handler(
    State(state): State<AppState>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<BTreeMap<String, ActivityDetails>>, AppError> {
    activities_service::list_activities(&state.pool, &query)
        .await
        .map(Json)
}

pub async fn list_days_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    activities_service::list_days(&state.pool).await.map(Json)
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
    pub teacher_username: Option<String>,
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Value>, AppError> {
    let message = signup_service::signup(
        &state.pool,
        &activity_name,
        &query.email,
        query.teacher_username.as_deref(),
    )
    .await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Value>, AppError> {
    let message = signup_service::unregister(
        &state.pool,
        &activity_name,
        &query.email,
        query.teacher_username.as_deref(),
    )
    .await?;
    Ok(Json(json!({ "message": message })))
}
