// src/presentation/http/extractors.rs
use crate::{application::error::ShowArticleError, domain::article::Slug};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// Raw `{slug}` path segment. Segments that cannot be decoded are rejected
/// with the same 400 body as a malformed slug.
#[derive(Debug, Clone)]
pub struct SlugPath(pub String);

impl<S> FromRequestParts<S> for SlugPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "slug path segment rejected");
                HttpError::from_error(ShowArticleError::ValidationErrors(Slug::format_errors()))
            })?;

        Ok(Self(slug))
    }
}
