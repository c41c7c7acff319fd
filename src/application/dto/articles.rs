use crate::domain::article::CreatedArticle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    #[schema(example = "283e60096c26aa3a39cf04712cdd1ff7")]
    pub slug: String,
    #[schema(example = "title")]
    pub title: String,
    #[schema(example = "description")]
    pub description: String,
    #[schema(example = "body")]
    pub body: String,
}

impl From<CreatedArticle> for ArticleDto {
    fn from(article: CreatedArticle) -> Self {
        let (slug, title, description, body) = article.into_parts();
        Self {
            slug: slug.into_inner(),
            title: title.into_inner(),
            description: description.into_inner(),
            body: body.into_inner(),
        }
    }
}
