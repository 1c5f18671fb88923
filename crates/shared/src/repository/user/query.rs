use crate::{
    abstract_trait::user::repository::query::UserQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::user::UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn fetch_list(
        &self,
        operation: &str,
        sql: &str,
        bind: Option<&str>,
    ) -> Result<Vec<UserModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let mut query = sqlx::query_as::<_, UserModel>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }

        query.fetch_all(&mut *conn).await.map_err(|e| {
            error!("❌ Database error in {operation}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            ORDER BY user_id
        "#;

        self.fetch_list("find_all users", sql, None).await
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }

    async fn find_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            WHERE firstname = $1
            ORDER BY user_id
        "#;

        self.fetch_list("find_by_first_name", sql, Some(first_name))
            .await
    }

    async fn find_by_surname(&self, surname: &str) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            WHERE surname = $1
            ORDER BY user_id
        "#;

        self.fetch_list("find_by_surname", sql, Some(surname)).await
    }

    async fn find_by_pin_code(&self, pin_code: &str) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            WHERE pincode = $1
            ORDER BY user_id
        "#;

        self.fetch_list("find_by_pin_code", sql, Some(pin_code)).await
    }

    async fn find_order_by_doj_asc(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            ORDER BY doj ASC NULLS LAST, user_id ASC
        "#;

        self.fetch_list("find_order_by_doj_asc", sql, None).await
    }

    async fn find_order_by_dob_asc(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = r#"
            SELECT user_id, firstname, surname, address, pincode, dob, doj, deleted
            FROM "user"
            ORDER BY dob ASC NULLS LAST, user_id ASC
        "#;

        self.fetch_list("find_order_by_dob_asc", sql, None).await
    }
}
