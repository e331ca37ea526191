use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{LinkedSlug, Page, PageAwaitingArticle};
use crate::domain::page::value_objects::PageSlug;
use async_trait::async_trait;

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    /// Candidate pages for a requested slug. Implementations may narrow
    /// the result in the store, but callers must not assume exact
    /// matching happened there: every returned row still goes through
    /// `PageSlug::matches_stored`.
    async fn find_candidates_by_slug(&self, slug: &PageSlug) -> DomainResult<Vec<Page>>;

    /// Pages that have at least one article, for the slug index.
    async fn list_linked_slugs(&self, limit: u32) -> DomainResult<Vec<LinkedSlug>>;

    /// Pages with a slug but no article yet, for the generation
    /// pipeline.
    async fn list_awaiting_article(&self, limit: u32) -> DomainResult<Vec<PageAwaitingArticle>>;
}
