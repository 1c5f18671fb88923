use crate::{
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError>;

    async fn update(&self, req: &UpdateUserRequest) -> Result<UserResponse, ServiceError>;

    async fn delete(&self, user_id: i32) -> Result<(), ServiceError>;
}
