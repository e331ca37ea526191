mod list;
mod resolve_by_page_id;
mod resolve_by_slug;
mod service;

pub use list::ListArticlesQuery;
pub use resolve_by_page_id::ResolveByPageIdQuery;
pub use resolve_by_slug::ResolveBySlugQuery;
pub use service::ArticleQueryService;
