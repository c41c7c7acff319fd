// src/application/error.rs
use crate::domain::errors::ValidationErrors;
use thiserror::Error;

pub type ShowArticleResult<T> = Result<T, ShowArticleError>;

/// Outcome of a failed show-article operation.
///
/// `ValidationErrors` and `NotFoundArticle` are expected outcomes; `Unexpected`
/// carries storage faults and is never produced for bad input.
#[derive(Debug, Error)]
pub enum ShowArticleError {
    #[error("validation error: {0}")]
    ValidationErrors(ValidationErrors),

    #[error("article not found: {slug}")]
    NotFoundArticle { slug: String },

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ShowArticleError {
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFoundArticle { slug: slug.into() }
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}

impl From<ValidationErrors> for ShowArticleError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationErrors(errors)
    }
}
