use super::ArticleQueryService;
use crate::{
    application::{
        dto::ResolvedArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{Page, PageSlug},
};

pub struct ResolveBySlugQuery {
    /// Path segments already joined with `/` and percent-decoded.
    pub slug: String,
}

impl ArticleQueryService {
    /// Resolve the current article for a URL slug: reserved static
    /// routes short-circuit to `NotFound` before any store access, then
    /// the page lookup runs with exact-match normalization, then the
    /// page-id resolution takes over.
    pub async fn resolve_by_slug(
        &self,
        query: ResolveBySlugQuery,
    ) -> ApplicationResult<ResolvedArticleDto> {
        let slug = PageSlug::new(query.slug)?;
        if slug.is_reserved() {
            return Err(ApplicationError::not_found(format!(
                "'{slug}' is a static route, not a content page"
            )));
        }

        let page = self.match_page(&slug).await?;
        let article = self.current_for_page(page.id).await?;
        Ok(ResolvedArticleDto::with_page(article, slug.as_str(), page))
    }

    /// The store narrows candidates, but equality after normalization
    /// is re-checked here: returned rows are never trusted to be exact
    /// matches. More than one surviving row is a data-integrity
    /// condition, not a tie to break silently.
    async fn match_page(&self, slug: &PageSlug) -> ApplicationResult<Page> {
        let candidates = self.page_repo.find_candidates_by_slug(slug).await?;
        let mut matched: Vec<Page> = candidates
            .into_iter()
            .filter(|page| slug.matches_stored(&page.url_slug))
            .collect();

        match matched.len() {
            0 => Err(ApplicationError::not_found(format!(
                "no page for slug '{slug}'"
            ))),
            1 => Ok(matched.remove(0)),
            n => Err(ApplicationError::ambiguous_slug(format!(
                "slug '{slug}' matches {n} pages"
            ))),
        }
    }
}
