mod list_awaiting;
mod list_slugs;
mod service;

pub use list_awaiting::ListAwaitingArticleQuery;
pub use list_slugs::ListLinkedSlugsQuery;
pub use service::PageQueryService;
