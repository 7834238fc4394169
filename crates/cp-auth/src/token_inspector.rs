use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::Utc;
use error_location::ErrorLocation;

/// Client-side bearer token inspection.
///
/// Only the payload segment is decoded; the signature is NOT verified. The
/// API stays the authority on validity, this only avoids sending a token that
/// is already known to be dead.
pub struct TokenInspector;

impl TokenInspector {
    /// Decode the payload claims without verifying the signature.
    #[track_caller]
    pub fn decode(token: &str) -> AuthErrorResult<Claims> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
            _ => {
                return Err(AuthError::MalformedToken {
                    message: "expected three dot-separated segments".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let trimmed = payload.trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(trimmed)
            .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
            .map_err(|e| AuthError::MalformedToken {
                message: format!("payload is not base64: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        serde_json::from_slice::<Claims>(&bytes).map_err(|e| AuthError::MalformedToken {
            message: format!("payload is not a claims object: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Decode and reject tokens whose `exp` is at or before `now`.
    #[track_caller]
    pub fn validate_at(token: &str, now: i64) -> AuthErrorResult<Claims> {
        let claims = Self::decode(token)?;
        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired {
                exp: claims.exp,
                now,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(claims)
    }

    #[track_caller]
    pub fn validate(token: &str) -> AuthErrorResult<Claims> {
        Self::validate_at(token, Utc::now().timestamp())
    }

    /// Malformed tokens count as expired.
    pub fn is_expired_at(token: &str, now: i64) -> bool {
        Self::validate_at(token, now).is_err()
    }

    pub fn is_expired(token: &str) -> bool {
        Self::is_expired_at(token, Utc::now().timestamp())
    }
}
