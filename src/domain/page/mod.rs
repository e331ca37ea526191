pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{LinkedSlug, Page, PageAwaitingArticle};
pub use repository::PageReadRepository;
pub use value_objects::{PageId, PageSlug};
