use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Login;
use crate::domain::user::models::Role;
use crate::inbound::http::guards::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequestBody>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    let login = Login::new(body.login).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state
        .user_service
        .create_user(CreateUserCommand {
            login,
            password: body.password,
            role: Role::from_value(body.role),
            last_name: body.last_name,
            first_name: body.first_name,
        })
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        CreateUserResponseData {
            message: "User created successfully".to_string(),
            id: user.id.0,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequestBody {
    login: String,
    password: String,
    role: i16,
    last_name: String,
    first_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub message: String,
    pub id: i64,
}
