use crate::domain::errors::DomainError;

/// Read-only queries: any sqlx failure is a transport/store problem,
/// not a constraint we can interpret.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
