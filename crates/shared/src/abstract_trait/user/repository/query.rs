use crate::{errors::RepositoryError, model::user::UserModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError>;

    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError>;

    async fn find_by_first_name(&self, first_name: &str)
    -> Result<Vec<UserModel>, RepositoryError>;

    async fn find_by_surname(&self, surname: &str) -> Result<Vec<UserModel>, RepositoryError>;

    async fn find_by_pin_code(&self, pin_code: &str) -> Result<Vec<UserModel>, RepositoryError>;

    /// Every record, ascending by date of joining.
    async fn find_order_by_doj_asc(&self) -> Result<Vec<UserModel>, RepositoryError>;

    /// Every record, ascending by date of birth.
    async fn find_order_by_dob_asc(&self) -> Result<Vec<UserModel>, RepositoryError>;
}
