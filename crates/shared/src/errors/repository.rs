use thiserror::Error;

/// Store faults. A missing row is not an error here; lookups and writes
/// report it through `Option`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
