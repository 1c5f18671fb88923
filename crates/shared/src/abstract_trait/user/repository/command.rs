use crate::{
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::user::UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    /// Inserts a new row; the store assigns `user_id`.
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;

    /// Replaces every column of an existing row. `None` when no row has `user_id`.
    async fn update(
        &self,
        user_id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<UserModel>, RepositoryError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, user_id: i32) -> Result<bool, RepositoryError>;
}
