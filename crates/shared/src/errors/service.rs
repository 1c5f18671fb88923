use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// Rejected request. The message is returned to the client verbatim.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ServiceError {
    pub fn user_not_found(user_id: i32) -> Self {
        Self::InvalidRequest(format!("User with ID {user_id} not found."))
    }

    pub fn user_does_not_exist(user_id: i32) -> Self {
        Self::InvalidRequest(format!("User with ID {user_id} does not exist."))
    }

    pub fn missing_user_record() -> Self {
        Self::InvalidRequest("User record must not be null.".to_string())
    }

    pub fn missing_user_record_or_id() -> Self {
        Self::InvalidRequest("User record or id must not be null.".to_string())
    }
}
