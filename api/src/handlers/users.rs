//! User handlers
//!
//! CRUD endpoints for the user resource under `/api/v1/users`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for creating a user
///
/// Missing fields default to their zero value and are then rejected by
/// domain validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i32,
}

/// Request body for updating a user
///
/// Omitted, null, empty or zero fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// User as returned by the API
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid user id: {}", raw)))
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let users = state.user_service.get_all_users().await?;

    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/v1/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let id = parse_id(&id)?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let request = parse_body(payload)?;
    let user = state
        .user_service
        .create_user(&request.name, &request.email, request.age)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user.into()).with_message("User created successfully")),
    ))
}

/// PUT /api/v1/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let id = parse_id(&id)?;
    let request = parse_body(payload)?;
    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let user = state
        .user_service
        .update_user(id, &name, &email, request.age.unwrap_or_default())
        .await?;

    Ok(Json(
        ApiResponse::ok(user.into()).with_message("User updated successfully"),
    ))
}

/// DELETE /api/v1/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let id = parse_id(&id)?;
    state.user_service.delete_user(id).await?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}
