use crate::application::{ShowArticleResult, error::ShowArticleError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

pub fn not_found_message(slug: &str) -> String {
    format!("{slug} に該当する記事は見つかりませんでした")
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    messages: Vec<String>,
}

impl HttpError {
    pub fn from_error(err: ShowArticleError) -> Self {
        match err {
            ShowArticleError::ValidationErrors(errors) => {
                Self::new(StatusCode::BAD_REQUEST, errors.messages())
            }
            ShowArticleError::NotFoundArticle { slug } => {
                Self::new(StatusCode::NOT_FOUND, vec![not_found_message(&slug)])
            }
            ShowArticleError::Unexpected(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                vec![INTERNAL_ERROR_MESSAGE.to_string()],
            ),
        }
    }

    fn new(status: StatusCode, messages: Vec<String>) -> Self {
        Self { status, messages }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = GenericErrorModel {
            errors: GenericErrorModelErrors {
                body: self.messages,
            },
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error envelope shared by every endpoint: `{"errors":{"body":[...]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenericErrorModel {
    pub errors: GenericErrorModelErrors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenericErrorModelErrors {
    pub body: Vec<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ShowArticleResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
