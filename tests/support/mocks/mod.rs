// tests/support/mocks/mod.rs
//! 記事リポジトリのテスト用モック
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;

pub use article_repos::{
    FailingArticleRead, InMemoryArticleRead, SEEDED_SLUG, seeded_article, seeded_repo,
};
