use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{self};

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Principal established for one request.
///
/// Extracting it runs the full gate: bearer token extraction, token
/// verification, and re-resolution of the credential record. It is derived
/// fresh on every request and never cached.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Principal that additionally holds administrator privileges.
///
/// Composes [`AuthenticatedUser`]: an unidentifiable caller is rejected with
/// 401 before the privilege check, an identified non-admin with 403. The two
/// are never collapsed.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: UserId,
}

fn unauthenticated() -> ApiError {
    // One message for every failure cause; the internal distinction stays in
    // the server logs
    ApiError::Unauthorized("Invalid authentication credentials".to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let user_id = state.authenticator.verify_token(token).map_err(|e| {
            tracing::warn!(error = %e, "token verification failed");
            unauthenticated()
        })?;
        let user_id = UserId(user_id);

        // The record must still exist: deleting a user invalidates every
        // token issued to them
        match state.user_service.find_user(user_id).await {
            Ok(Some(_)) => Ok(AuthenticatedUser { user_id }),
            Ok(None) => {
                tracing::warn!(%user_id, "token subject no longer exists");
                Err(unauthenticated())
            }
            Err(e) => {
                // Storage fault, not "no such user": fail closed
                tracing::error!(error = %e, "credential lookup failed during authentication");
                Err(unauthenticated())
            }
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser { user_id } =
            AuthenticatedUser::from_request_parts(parts, state).await?;

        match state.user_service.find_user(user_id).await {
            Ok(Some(user)) if user.role.is_admin() => Ok(AdminUser { user_id }),
            Ok(_) => Err(ApiError::Forbidden(
                "Access denied: administrator privileges required".to_string(),
            )),
            Err(e) => {
                tracing::error!(error = %e, "credential lookup failed during privilege check");
                Err(unauthenticated())
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("missing authorization header");
            unauthenticated()
        })?;

    let value = header.to_str().map_err(|_| {
        tracing::debug!("authorization header is not valid ascii");
        unauthenticated()
    })?;

    value.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("authorization header does not use the bearer scheme");
        unauthenticated()
    })
}
