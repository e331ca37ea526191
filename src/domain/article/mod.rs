pub mod entity;
pub mod repository;
pub mod selection;
pub mod value_objects;

pub use entity::{Article, ArticleSummary};
pub use repository::ArticleReadRepository;
pub use selection::current_article;
pub use value_objects::{ArticleId, ArticleStatus};
