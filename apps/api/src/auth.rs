use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Current session identity, if any.
///
/// The authenticating gateway injects `x-user-id` after validating the
/// session; absence means an anonymous viewer. Read views accept either,
/// so extraction never rejects. Handlers that need an identity check
/// the inner `Option`.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Viewer(
            parts
                .headers
                .get("x-user-id")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        ))
    }
}
