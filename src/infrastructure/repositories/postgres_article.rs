// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleReadRepository, Body, CreatedArticle, Description, FindBySlugError, Slug, Title,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const FIND_BY_SLUG_SQL: &str = "SELECT slug, title, description, body FROM articles WHERE slug = $1";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    slug: String,
    title: String,
    description: String,
    body: String,
}

// Rows were validated on write; rebuild them without re-checking.
impl From<ArticleRow> for CreatedArticle {
    fn from(row: ArticleRow) -> Self {
        CreatedArticle::new_without_validation(
            Slug::new_without_validation(row.slug),
            Title::new_without_validation(row.title),
            Description::new_without_validation(row.description),
            Body::new_without_validation(row.body),
        )
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    #[tracing::instrument(skip_all, fields(slug = %slug))]
    async fn find_by_slug(&self, slug: &Slug) -> Result<CreatedArticle, FindBySlugError> {
        let row = sqlx::query_as::<_, ArticleRow>(FIND_BY_SLUG_SQL)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(CreatedArticle::from)
            .ok_or_else(|| FindBySlugError::NotFound { slug: slug.clone() })
    }
}
