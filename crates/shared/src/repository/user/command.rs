use crate::{
    abstract_trait::user::repository::command::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::user::UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct UserCommandRepository {
    db_pool: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db_pool.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO "user" (firstname, surname, address, pincode, dob, doj, deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING user_id, firstname, surname, address, pincode, dob, doj, deleted
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.surname)
        .bind(&req.address)
        .bind(&req.pin_code)
        .bind(req.dob)
        .bind(req.doj)
        .bind(req.deleted)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create user: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(record)
    }

    async fn update(
        &self,
        user_id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE "user"
            SET
                firstname = $2,
                surname = $3,
                address = $4,
                pincode = $5,
                dob = $6,
                doj = $7,
                deleted = $8
            WHERE user_id = $1
            RETURNING user_id, firstname, surname, address, pincode, dob, doj, deleted
            "#,
        )
        .bind(user_id)
        .bind(&req.first_name)
        .bind(&req.surname)
        .bind(&req.address)
        .bind(&req.pin_code)
        .bind(req.dob)
        .bind(req.doj)
        .bind(req.deleted)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in update user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }

    async fn delete(&self, user_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM "user"
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in delete user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
