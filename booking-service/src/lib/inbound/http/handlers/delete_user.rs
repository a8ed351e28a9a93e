use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Login;
use crate::inbound::http::guards::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn delete_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<DeleteUserRequestBody>,
) -> Result<ApiSuccess<DeleteUserResponseData>, ApiError> {
    let login = Login::new(body.login).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.user_service.delete_user(&login).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteUserResponseData {
            message: format!("User '{}' deleted successfully", login),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteUserRequestBody {
    login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteUserResponseData {
    pub message: String,
}
