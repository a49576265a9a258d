//! User listing handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::UserService;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// List all registered users (sanitized, no password hashes)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
