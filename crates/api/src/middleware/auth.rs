//! Bearer-token authentication extractor for the admin surface.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use wall_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured admin token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler on the admin
/// surface:
///
/// ```ignore
/// async fn my_handler(_admin: AdminToken) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// When no `ADMIN_TOKEN` is configured the extractor rejects every
/// request, disabling the surface entirely.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.admin_token.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Admin surface is disabled (no admin token configured)".into(),
            ))
        })?;

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !token_matches(token, expected) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(AdminToken)
    }
}

/// Compare the presented token against the configured one. For
/// equal-length inputs the time taken is independent of the number of
/// leading bytes that match.
fn token_matches(presented: &str, expected: &str) -> bool {
    let presented = presented.as_bytes();
    let expected = expected.as_bytes();
    if presented.len() != expected.len() {
        return false;
    }
    presented
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_matches_exact_value_only() {
        assert!(token_matches("secret-token", "secret-token"));
        assert!(!token_matches("secret-tokeX", "secret-token"));
        assert!(!token_matches("Secret-token", "secret-token"));
        assert!(!token_matches("secret", "secret-token"));
        assert!(!token_matches("secret-token-extra", "secret-token"));
        assert!(!token_matches("", "secret-token"));
    }
}
