use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by a signed access token.
///
/// Deliberately minimal: the subject is the stringified numeric user id and
/// `exp` the Unix timestamp after which the token is no longer accepted.
/// Everything else about the user is re-resolved from storage on every
/// request, so tokens never carry roles or display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stringified user id)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user expiring at the given timestamp.
    pub fn new(user_id: i64, expires_at: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: expires_at,
        }
    }
}
