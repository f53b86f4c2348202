use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    backend::BackendError,
    state::AppState,
    users::{
        dto::{HealthResponse, ListParams},
        model::{NewUser, User, UserPage},
        validation::{validate_new_user, validate_pagination, validate_user_id, ValidationError},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id", get(get_user))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(p): Query<ListParams>,
) -> Result<Json<UserPage>, (StatusCode, String)> {
    let (page, page_size) = validate_pagination(p.page, p.page_size).map_err(bad_request)?;
    let users = state
        .backend
        .list_users(page, page_size)
        .await
        .map_err(upstream)?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, (StatusCode, String)> {
    let id = validate_user_id(id).map_err(bad_request)?;
    match state.backend.get_user(id).await.map_err(upstream)? {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(user_id = id, "user not found");
            Err((StatusCode::NOT_FOUND, format!("User with ID {id} not found")))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), (StatusCode, String)> {
    let req = validate_new_user(&payload).map_err(bad_request)?;
    let user = state.backend.create_user(&req).await.map_err(upstream)?;
    info!(user_id = user.id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.backend.list_users(1, 1).await {
        Ok(page) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                total_count: Some(page.total_count),
            }),
        ),
        Err(e) => {
            error!(error = %e, "backend health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    total_count: None,
                }),
            )
        }
    }
}

fn bad_request(e: ValidationError) -> (StatusCode, String) {
    warn!(error = %e, "rejected request");
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn upstream(e: BackendError) -> (StatusCode, String) {
    let status = match &e {
        BackendError::AlreadyExists(_) => StatusCode::CONFLICT,
        BackendError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        BackendError::Unreachable(_) | BackendError::Status { .. } | BackendError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    };
    error!(error = %e, %status, "backend call failed");
    (status, e.to_string())
}
