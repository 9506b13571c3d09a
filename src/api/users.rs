//! User endpoint handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{Json, RequestId};
use crate::domain::{AppError, User, UserPatch};

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Json<User>, AppError>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(user) = body.map_err(|e| request_id.tag(e))?;

    debug!(username = %user.username, "Creating user");

    let user = state
        .user_service
        .register(user, false)
        .await
        .map_err(|e| request_id.tag(e))?;

    Ok((StatusCode::CREATED, Json(state.sanitize(user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    request_id: RequestId,
) -> Result<Json<Vec<User>>, AppError> {
    debug!("Listing all users");

    let users = state
        .user_service
        .list()
        .await
        .map_err(|e| request_id.tag(e))?;

    Ok(Json(users.into_iter().map(|u| state.sanitize(u)).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    debug!(user_id = %id, "Getting user");

    let user = state
        .user_service
        .get(&id)
        .await
        .map_err(|e| request_id.tag(e))?;

    Ok(Json(state.sanitize(user)))
}

/// PUT /users/{id}/patch
pub async fn patch_user(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<String>,
    body: Result<Json<UserPatch>, AppError>,
) -> Result<Json<User>, AppError> {
    let Json(patch) = body.map_err(|e| request_id.tag(e))?;

    debug!(user_id = %id, "Patching user");

    let user = state
        .user_service
        .patch(&id, patch)
        .await
        .map_err(|e| request_id.tag(e))?;

    Ok(Json(state.sanitize(user)))
}
