pub mod dto;
pub mod error;
pub mod queries;
pub mod services;

pub use error::{ShowArticleError, ShowArticleResult};
