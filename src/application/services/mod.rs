// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::articles::ArticleQueryService, domain::article::ArticleReadRepository,
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(article_read_repo));

        Self { article_queries }
    }
}
