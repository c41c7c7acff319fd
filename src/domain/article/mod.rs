pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::CreatedArticle;
pub use repository::{ArticleReadRepository, FindBySlugError};
pub use value_objects::{Body, Description, SLUG_FORMAT_MESSAGE, SLUG_LENGTH, Slug, Title};
