// tests/support/mocks/article_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use conduit_core::domain::article::{
    ArticleReadRepository, Body, CreatedArticle, Description, FindBySlugError, Slug, Title,
};

pub const SEEDED_SLUG: &str = "283e60096c26aa3a39cf04712cdd1ff7";

pub fn seeded_article() -> CreatedArticle {
    CreatedArticle::new_without_validation(
        Slug::new_without_validation(SEEDED_SLUG),
        Title::new_without_validation("title"),
        Description::new_without_validation("description"),
        Body::new_without_validation("body"),
    )
}

pub fn seeded_repo() -> InMemoryArticleRead {
    InMemoryArticleRead::new(vec![seeded_article()])
}

/* -------------------------------- InMemoryArticleRead -------------------------------- */

/// 記事をメモリ上に保持し、呼び出し回数と返却した行数を記録するリポジトリ
pub struct InMemoryArticleRead {
    rows: HashMap<String, CreatedArticle>,
    calls: AtomicUsize,
    rows_returned: AtomicUsize,
    queried: Mutex<Vec<String>>,
}

impl InMemoryArticleRead {
    pub fn new(articles: Vec<CreatedArticle>) -> Self {
        let rows = articles
            .into_iter()
            .map(|a| (a.slug().as_str().to_string(), a))
            .collect();
        Self {
            rows,
            calls: AtomicUsize::new(0),
            rows_returned: AtomicUsize::new(0),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn rows_returned(&self) -> usize {
        self.rows_returned.load(Ordering::SeqCst)
    }

    pub fn queried_slugs(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRead {
    async fn find_by_slug(&self, slug: &Slug) -> Result<CreatedArticle, FindBySlugError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queried.lock().unwrap().push(slug.as_str().to_string());

        match self.rows.get(slug.as_str()) {
            Some(article) => {
                self.rows_returned.fetch_add(1, Ordering::SeqCst);
                Ok(article.clone())
            }
            None => Err(FindBySlugError::NotFound { slug: slug.clone() }),
        }
    }
}

/* -------------------------------- FailingArticleRead -------------------------------- */

/// 常に永続化エラーを返すリポジトリ
pub struct FailingArticleRead {
    pub message: String,
}

impl FailingArticleRead {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_slug(&self, _slug: &Slug) -> Result<CreatedArticle, FindBySlugError> {
        Err(FindBySlugError::Persistence(self.message.clone()))
    }
}
