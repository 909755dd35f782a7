use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::users::{User, UserUpdate};
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::routes::AppState;

pub const MSG_DELETED: &str = "Successfully deleted User with selected ID";

fn decode_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected request body");
            Err(ApiError::malformed_body())
        }
    }
}

/// An id that cannot be extracted can never match a stored record.
fn decode_id(id: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected path id");
            Err(ApiError::not_found())
        }
    }
}

/// Create a user; 201 with the stored record.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = decode_body(payload)?;
    let created = state.users.create(user).await?;
    info!(id = %created.id, "create user");
    Ok((StatusCode::CREATED, Json(created)))
}

/// List every stored user.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let id = decode_id(id)?;
    Ok(Json(state.users.get(&id).await?))
}

/// Replace the name of the user at `id`.
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let id = decode_id(id)?;
    let input = decode_body(payload)?;
    let updated = state.users.update(&id, input).await?;
    info!(%id, "update user");
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let id = decode_id(id)?;
    state.users.delete(&id).await?;
    info!(%id, "delete user");
    Ok(Json(MSG_DELETED))
}
