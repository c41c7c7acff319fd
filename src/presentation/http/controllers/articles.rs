// src/presentation/http/controllers/articles.rs
use crate::application::{dto::ArticleDto, queries::articles::ShowArticleQuery};
use crate::presentation::http::error::{GenericErrorModel, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::SlugPath;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SingleArticleResponse {
    pub article: ArticleDto,
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    operation_id = "getArticle",
    summary = "単一記事取得",
    description = "slug に一致する記事を取得します。",
    params(
        ("slug" = String, Path, description = "記事の slug (32 文字の英小文字数字)")
    ),
    responses(
        (status = 200, description = "OK", body = SingleArticleResponse,
            example = json!({"article": {
                "slug": "283e60096c26aa3a39cf04712cdd1ff7",
                "title": "title",
                "description": "description",
                "body": "body"
            }})),
        (status = 400, description = "Bad Request", body = GenericErrorModel,
            example = json!({"errors": {"body": ["slug は 32 文字の英小文字数字です。"]}})),
        (status = 404, description = "Not Found", body = GenericErrorModel,
            example = json!({"errors": {"body": ["slug に該当する記事は見つかりませんでした"]}}))
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    SlugPath(slug): SlugPath,
) -> HttpResult<Json<SingleArticleResponse>> {
    state
        .services
        .article_queries
        .show_article(ShowArticleQuery { slug })
        .await
        .into_http()
        .map(|article| {
            Json(SingleArticleResponse {
                article: article.into(),
            })
        })
}
