use crate::{
    abstract_trait::user::{
        repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
        service::command::UserCommandServiceTrait,
    },
    domain::{
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserResponse,
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};

pub struct UserCommandService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    metrics: Metrics,
}

impl UserCommandService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        metrics: Metrics,
    ) -> Self {
        Self {
            query,
            command,
            metrics,
        }
    }

    fn record<T>(&self, method: Method, start: Instant, result: &Result<T, ServiceError>) {
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }

    async fn ensure_exists(
        &self,
        user_id: i32,
        missing: fn(i32) -> ServiceError,
    ) -> Result<(), ServiceError> {
        match self.query.find_by_id(user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                info!("👤 User with ID {user_id} not found");
                Err(missing(user_id))
            }
            Err(e) => {
                error!("❌ Failed to look up user {user_id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_inner(&self, req: &UpdateUserRequest) -> Result<UserResponse, ServiceError> {
        let Some(user_id) = req.user_id else {
            error!("Update rejected: missing user id");
            return Err(ServiceError::missing_user_record_or_id());
        };

        info!("🔄 Updating user id={user_id}");

        self.ensure_exists(user_id, ServiceError::user_not_found)
            .await?;

        let updated = self
            .command
            .update(user_id, req)
            .await
            .map_err(|e| {
                error!("💥 Failed to update user {user_id}: {e:?}");
                ServiceError::Repo(e)
            })?
            // removed between the existence check and the write
            .ok_or_else(|| ServiceError::user_not_found(user_id))?;

        let response = UserResponse::from(updated);
        info!("✅ User updated successfully with id={}", response.user_id);

        Ok(response)
    }

    async fn delete_inner(&self, user_id: i32) -> Result<(), ServiceError> {
        info!("🧨 Deleting user id={user_id}");

        self.ensure_exists(user_id, ServiceError::user_does_not_exist)
            .await?;

        let removed = self.command.delete(user_id).await.map_err(|e| {
            error!("💥 Failed to delete user {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if !removed {
            return Err(ServiceError::user_does_not_exist(user_id));
        }

        info!("✅ User {user_id} deleted");

        Ok(())
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserResponse, ServiceError> {
        info!("🆕 Creating user: {:?} {:?}", req.first_name, req.surname);
        let start = Instant::now();

        let result = self
            .command
            .create(req)
            .await
            .map(UserResponse::from)
            .map_err(|e| {
                error!(
                    "💥 Failed to create user {:?} {:?}: {e:?}",
                    req.first_name, req.surname
                );
                ServiceError::Repo(e)
            });

        if let Ok(user) = &result {
            info!("✅ User created successfully with id={}", user.user_id);
        }

        self.record(Method::Post, start, &result);
        result
    }

    async fn update(&self, req: &UpdateUserRequest) -> Result<UserResponse, ServiceError> {
        let start = Instant::now();

        let result = self.update_inner(req).await;

        self.record(Method::Put, start, &result);
        result
    }

    async fn delete(&self, user_id: i32) -> Result<(), ServiceError> {
        let start = Instant::now();

        let result = self.delete_inner(user_id).await;

        self.record(Method::Delete, start, &result);
        result
    }
}
