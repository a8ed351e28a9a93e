use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::guards::AuthenticatedUser;

/// Diagnostic endpoint: succeeds only when the full authentication gate
/// admits the caller.
pub async fn verify_token(user: AuthenticatedUser) -> ApiSuccess<VerifyTokenResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        VerifyTokenResponseData {
            valid: true,
            user_id: user.user_id.0,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyTokenResponseData {
    pub valid: bool,
    pub user_id: i64,
}
