// src/infrastructure/repositories/mod.rs
mod error;
mod mysql_article;
mod mysql_page;

pub(crate) use error::map_sqlx;
pub use mysql_article::MySqlArticleRepository;
pub use mysql_page::MySqlPageRepository;
