// src/domain/article/entity.rs
use crate::domain::article::value_objects::{Body, Description, Slug, Title};

/// An article that has already been persisted.
///
/// Only ever rebuilt from stored data, so it has no validating constructor and
/// exposes no mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedArticle {
    slug: Slug,
    title: Title,
    description: Description,
    body: Body,
}

impl CreatedArticle {
    pub fn new_without_validation(
        slug: Slug,
        title: Title,
        description: Description,
        body: Body,
    ) -> Self {
        Self {
            slug,
            title,
            description,
            body,
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_parts(self) -> (Slug, Title, Description, Body) {
        (self.slug, self.title, self.description, self.body)
    }
}
