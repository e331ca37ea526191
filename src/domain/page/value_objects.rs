use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Slugs claimed by static informational routes. A request for one of
/// these is never a content-page lookup.
const RESERVED_SLUGS: &[&str] = &[
    "about",
    "chart-test",
    "company",
    "contact",
    "preview",
    "privacy",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            Err(DomainError::Validation(
                "page id must be non-negative".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    /// Parse a caller-supplied identifier. Rejects anything that is not
    /// a non-negative integer before any store access happens.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let id = trimmed.parse::<i64>().map_err(|_| {
            DomainError::Validation(format!("invalid page id: {trimmed:?}"))
        })?;
        Self::new(id)
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A requested URL slug. Multi-segment paths have already been joined
/// with `/` and percent-decoded by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlug(String);

impl PageSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_SLUGS.contains(&self.0.as_str())
    }

    /// Compare against a stored `url_slug`, which may carry a leading
    /// and/or trailing `/`. Strips at most one of each and requires
    /// exact equality with the requested slug afterwards.
    pub fn matches_stored(&self, stored: &str) -> bool {
        normalize_stored(stored) == self.0
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PageSlug> for String {
    fn from(value: PageSlug) -> Self {
        value.0
    }
}

fn normalize_stored(stored: &str) -> &str {
    let stored = stored.strip_prefix('/').unwrap_or(stored);
    stored.strip_suffix('/').unwrap_or(stored)
}
