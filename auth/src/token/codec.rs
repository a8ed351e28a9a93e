use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Codec for signed, time-bounded access tokens.
///
/// Encodes the minimal claim set with HS256 (HMAC with SHA-256) over a
/// process-wide secret. The clock is always passed in explicitly, so issuance
/// and verification are pure functions of their inputs plus the secret.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec from the process-wide secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotating the secret invalidates every previously issued token
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Numeric user identifier, stored as the `sub` claim
    /// * `now` - Issuance instant
    /// * `ttl` - Validity window; the token expires at `now + ttl`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, (now + ttl).timestamp());
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and extract the user id it was issued for.
    ///
    /// The signature is checked before anything else; no field of an
    /// unverified payload is ever inspected. Expiry is then compared against
    /// the caller's clock with no leeway: a token whose `exp` equals `now`
    /// is already expired.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    /// * `now` - Verification instant
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `Malformed` - Token structure or payload cannot be decoded
    /// * `Expired` - `exp` is not strictly in the future
    /// * `InvalidSubject` - `sub` does not parse as a user id
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<i64, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the explicit clock, exact boundary
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::InvalidSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now();

        let token = codec
            .issue(42, now, Duration::minutes(30))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let user_id = codec.verify(&token, now).expect("Failed to verify token");
        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let codec = TokenCodec::new(SECRET);
        let issued_at = Utc::now();
        let ttl = Duration::minutes(30);

        let token = codec
            .issue(1, issued_at, ttl)
            .expect("Failed to issue token");

        // One second before the boundary: still valid
        let just_before = issued_at + ttl - Duration::seconds(1);
        assert_eq!(codec.verify(&token, just_before).unwrap(), 1);

        // Exactly at the boundary: already expired
        let at_boundary = issued_at + ttl;
        assert!(matches!(
            codec.verify(&token, at_boundary),
            Err(TokenError::Expired)
        ));

        // Past the boundary: expired
        let after = issued_at + ttl + Duration::hours(1);
        assert!(matches!(codec.verify(&token, after), Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(b"another_secret_key_32_bytes_long!!");
        let now = Utc::now();

        let token = codec
            .issue(1, now, Duration::minutes(30))
            .expect("Failed to issue token");

        assert!(other.verify(&token, now).is_err());
    }

    #[test]
    fn test_single_character_mutation_fails() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now();

        let token = codec
            .issue(123_456, now, Duration::minutes(30))
            .expect("Failed to issue token");

        // Mutate one character at a sample of positions across the token
        for position in (0..token.len()).step_by(3) {
            let mut mutated: Vec<char> = token.chars().collect();
            mutated[position] = if mutated[position] == 'A' { 'B' } else { 'A' };
            let mutated: String = mutated.into_iter().collect();

            if mutated == token {
                continue;
            }

            assert!(
                codec.verify(&mutated, now).is_err(),
                "mutation at position {} was accepted",
                position
            );
        }
    }

    #[test]
    fn test_verify_garbage_token() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now();

        assert!(codec.verify("", now).is_err());
        assert!(codec.verify("not.a.token", now).is_err());
        assert!(codec.verify("missing-separators", now).is_err());
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let codec = TokenCodec::new(SECRET);
        let now = Utc::now();

        // Correctly signed token whose subject is not a user id
        let claims = Claims {
            sub: "not-a-number".to_string(),
            exp: (now + Duration::minutes(30)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        assert!(matches!(
            codec.verify(&token, now),
            Err(TokenError::InvalidSubject)
        ));
    }

    #[test]
    fn test_expired_check_runs_after_signature_check() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(b"another_secret_key_32_bytes_long!!");
        let now = Utc::now();

        // Expired and signed with the wrong key: must not report Expired,
        // the signature failure wins
        let token = other
            .issue(1, now - Duration::hours(2), Duration::minutes(30))
            .expect("Failed to issue token");

        assert!(!matches!(
            codec.verify(&token, now),
            Err(TokenError::Expired)
        ));
        assert!(codec.verify(&token, now).is_err());
    }
}
