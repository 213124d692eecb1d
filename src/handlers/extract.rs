use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::errors::request::RequestError;
use crate::errors::MonitorError;

/// Single path segment. Rejections surface as a JSON 400 instead of axum's
/// plain-text body.
#[derive(Debug)]
pub struct PathParam(pub String);

impl<S> FromRequestParts<S> for PathParam
where
    S: Send + Sync,
{
    type Rejection = MonitorError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => Err(RequestError::InvalidPath {
                reason: rejection.body_text(),
            }
            .into()),
        }
    }
}
