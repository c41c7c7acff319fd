mod service;
mod show;

pub use service::ArticleQueryService;
pub use show::ShowArticleQuery;
