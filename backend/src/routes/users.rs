//! User routes
//!
//! Account creation, login and logout. Responses never include the stored
//! password.

use crate::error::ApiResult;
use crate::routes::extract::ApiJson;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use contact_list_shared::{CredentialsRequest, LogoutResponse, UserResponse};
use uuid::Uuid;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/login", post(login))
        .route("/:user_id/logout", post(logout))
}

/// POST /api/v1/users - Create an account
async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::create(state.users(), &req.username, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/v1/users/login - Check credentials
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::authenticate(state.users(), &req.username, &req.password).await?;
    Ok(Json(user.into()))
}

/// POST /api/v1/users/:user_id/logout - Always acknowledged
async fn logout(Path(user_id): Path<Uuid>) -> Json<LogoutResponse> {
    UserService::logout(user_id);
    Json(LogoutResponse { logged_out: true })
}
