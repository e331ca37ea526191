// src/domain/article/selection.rs
use crate::domain::article::entity::Article;
use std::cmp::Reverse;

/// Pick the current article among all rows for one page: any draft
/// pre-empts every published row (editorial preview workflow), and
/// within the winning status the latest `generated_at` wins. A NULL
/// `generated_at` ranks as oldest.
///
/// Ordering is owned by this layer even though the store could express
/// a similar `ORDER BY`; the store contract is "all rows for the page".
pub fn current_article(articles: Vec<Article>) -> Option<Article> {
    // `Reverse(None) > Reverse(Some(_))`, so timestamp-less rows lose
    // to any dated row of the same status.
    articles
        .into_iter()
        .min_by_key(|article| (article.status.rank(), Reverse(article.generated_at)))
}
