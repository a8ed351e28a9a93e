use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Login;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An unparseable login reads the same as a wrong one from the outside
    let login = Login::new(body.username)
        .map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    let outcome = state.user_service.login(&login, &body.password).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: outcome.access_token,
            token_type: "bearer".to_string(),
            user_role: outcome.user.role.as_value(),
            user_name: outcome.user.last_name,
            user_login: outcome.user.login.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    pub user_role: i16,
    pub user_name: String,
    pub user_login: String,
}
