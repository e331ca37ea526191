pub mod articles;
pub mod pages;

pub use articles::{ArticleSummaryDto, ResolvedArticleDto};
pub use pages::{
    AwaitingArticleIndexDto, LinkedSlugDto, PageAwaitingArticleDto, PageInfoDto, SlugIndexDto,
};
