//! Dashboard handler - the minimal protected resource.

use axum::{extract::State, response::Json, routing::get, Extension, Router};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::UserService;
use crate::types::MessageResponse;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// Personalized greeting for any authenticated user
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Greeting for the authenticated user", body = MessageResponse),
        (status = 401, description = "Token missing"),
        (status = 403, description = "Invalid or expired token")
    )
)]
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<MessageResponse>> {
    // Re-read the account so a deleted user's still-valid token stops working
    let user = state.user_service.get_user(user.id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Welcome {}! You are logged in as {}.",
        user.email, user.role
    ))))
}
