use crate::{domain::responses::UserResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError>;

    async fn find_by_id(&self, user_id: i32) -> Result<UserResponse, ServiceError>;

    async fn find_by_first_name(&self, first_name: &str)
    -> Result<Vec<UserResponse>, ServiceError>;

    async fn find_by_surname(&self, surname: &str) -> Result<Vec<UserResponse>, ServiceError>;

    async fn find_by_pin_code(&self, pin_code: &str) -> Result<Vec<UserResponse>, ServiceError>;

    async fn sort_by_doj(&self) -> Result<Vec<UserResponse>, ServiceError>;

    async fn sort_by_dob(&self) -> Result<Vec<UserResponse>, ServiceError>;
}
