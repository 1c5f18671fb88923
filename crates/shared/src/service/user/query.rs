use crate::{
    abstract_trait::user::{
        repository::query::DynUserQueryRepository, service::query::UserQueryServiceTrait,
    },
    domain::responses::UserResponse,
    errors::{RepositoryError, ServiceError},
    model::user::UserModel,
    utils::{Method, Metrics, Status},
};
use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};

pub struct UserQueryService {
    query: DynUserQueryRepository,
    metrics: Metrics,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, metrics: Metrics) -> Self {
        Self { query, metrics }
    }

    fn finish_list(
        &self,
        operation: &str,
        start: Instant,
        result: Result<Vec<UserModel>, RepositoryError>,
    ) -> Result<Vec<UserResponse>, ServiceError> {
        let elapsed = start.elapsed().as_secs_f64();

        match result {
            Ok(users) => {
                info!("✅ {operation}: found {} users", users.len());
                self.metrics.record(Method::Get, Status::Success, elapsed);
                Ok(users.into_iter().map(UserResponse::from).collect())
            }
            Err(e) => {
                error!("❌ {operation} failed: {e:?}");
                self.metrics.record(Method::Get, Status::Error, elapsed);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<Vec<UserResponse>, ServiceError> {
        info!("🔍 Fetching all users");
        let start = Instant::now();

        let result = self.query.find_all().await;
        self.finish_list("find_all", start, result)
    }

    async fn find_by_id(&self, user_id: i32) -> Result<UserResponse, ServiceError> {
        info!("🔍 Finding user by ID: {user_id}");
        let start = Instant::now();

        let result = match self.query.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(UserResponse::from(user)),
            Ok(None) => {
                info!("👤 User with ID {user_id} not found");
                Err(ServiceError::user_not_found(user_id))
            }
            Err(e) => {
                error!("❌ Database error fetching user ID {user_id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        };

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(Method::Get, status, start.elapsed().as_secs_f64());

        result
    }

    async fn find_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<UserResponse>, ServiceError> {
        info!("🔍 Finding users by first name: {first_name}");
        let start = Instant::now();

        let result = self.query.find_by_first_name(first_name).await;
        self.finish_list("find_by_first_name", start, result)
    }

    async fn find_by_surname(&self, surname: &str) -> Result<Vec<UserResponse>, ServiceError> {
        info!("🔍 Finding users by surname: {surname}");
        let start = Instant::now();

        let result = self.query.find_by_surname(surname).await;
        self.finish_list("find_by_surname", start, result)
    }

    async fn find_by_pin_code(&self, pin_code: &str) -> Result<Vec<UserResponse>, ServiceError> {
        info!("🔍 Finding users by pin code: {pin_code}");
        let start = Instant::now();

        let result = self.query.find_by_pin_code(pin_code).await;
        self.finish_list("find_by_pin_code", start, result)
    }

    async fn sort_by_doj(&self) -> Result<Vec<UserResponse>, ServiceError> {
        info!("📅 Listing users by date of joining");
        let start = Instant::now();

        let result = self.query.find_order_by_doj_asc().await;
        self.finish_list("sort_by_doj", start, result)
    }

    async fn sort_by_dob(&self) -> Result<Vec<UserResponse>, ServiceError> {
        info!("📅 Listing users by date of birth");
        let start = Instant::now();

        let result = self.query.find_order_by_dob_asc().await;
        self.finish_list("sort_by_dob", start, result)
    }
}
