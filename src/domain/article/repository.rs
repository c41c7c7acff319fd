use crate::domain::article::entity::CreatedArticle;
use crate::domain::article::value_objects::Slug;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FindBySlugError {
    #[error("no article stored for slug {slug}")]
    NotFound { slug: Slug },
    #[error("persistence error: {0}")]
    Persistence(String),
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Issues a single read keyed by `slug`. Zero rows is `NotFound`.
    async fn find_by_slug(&self, slug: &Slug) -> Result<CreatedArticle, FindBySlugError>;
}
