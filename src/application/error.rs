// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Resolver error taxonomy. Every failure a caller can observe is one
/// of these four kinds; no partial results are ever returned.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Malformed identifier, rejected before any lookup.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No matching page or article; terminal.
    #[error("not found: {0}")]
    NotFound(String),

    /// A normalized slug matched more than one page. Data-integrity
    /// condition, surfaced instead of silently picking a row.
    #[error("ambiguous slug: {0}")]
    AmbiguousSlug(String),

    /// Transport or store failure. Never retried here; the caller
    /// decides the user-facing presentation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ApplicationError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn ambiguous_slug(msg: impl Into<String>) -> Self {
        Self::AmbiguousSlug(msg.into())
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "InvalidRequest",
            Self::NotFound(_) => "NotFound",
            Self::AmbiguousSlug(_) => "AmbiguousSlug",
            Self::StoreUnavailable(_) => "StoreUnavailable",
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidRequest(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::StoreUnavailable(msg),
        }
    }
}
