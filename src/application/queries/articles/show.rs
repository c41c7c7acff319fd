use super::ArticleQueryService;
use crate::{
    application::error::{ShowArticleError, ShowArticleResult},
    domain::article::{CreatedArticle, FindBySlugError, Slug},
};

pub struct ShowArticleQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Validate the raw slug, then load the article stored under it.
    ///
    /// The store is not consulted when the slug is malformed.
    pub async fn show_article(&self, query: ShowArticleQuery) -> ShowArticleResult<CreatedArticle> {
        let slug = Slug::new(query.slug).inspect_err(|errors| {
            tracing::debug!(%errors, "rejected malformed slug");
        })?;

        self.read_repo
            .find_by_slug(&slug)
            .await
            .map_err(|err| match err {
                FindBySlugError::NotFound { slug } => {
                    tracing::debug!(slug = %slug, "article not found");
                    ShowArticleError::not_found(slug.into_inner())
                }
                FindBySlugError::Persistence(msg) => {
                    tracing::error!(slug = %slug, error = %msg, "article lookup failed");
                    ShowArticleError::unexpected(msg)
                }
            })
    }
}
