#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use shared::{
    abstract_trait::user::repository::{
        command::{DynUserCommandRepository, UserCommandRepositoryTrait},
        query::{DynUserQueryRepository, UserQueryRepositoryTrait},
    },
    domain::requests::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
    model::user::UserModel,
};
use std::sync::{Arc, Mutex};
use user::{handler::AppRouter, state::AppState};

/// Stand-in for the Postgres store: ids are assigned sequentially from 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<UserModel>>,
    next_id: Mutex<i32>,
}

impl InMemoryUserRepository {
    fn select(&self, keep: impl Fn(&UserModel) -> bool) -> Vec<UserModel> {
        let rows = self.rows.lock().unwrap();
        let mut selected: Vec<UserModel> = rows.iter().filter(|u| keep(u)).cloned().collect();
        selected.sort_by_key(|u| u.user_id);
        selected
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        Ok(self.select(|_| true))
    }

    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError> {
        Ok(self.select(|u| u.user_id == user_id).into_iter().next())
    }

    async fn find_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<UserModel>, RepositoryError> {
        Ok(self.select(|u| u.firstname.as_deref() == Some(first_name)))
    }

    async fn find_by_surname(&self, surname: &str) -> Result<Vec<UserModel>, RepositoryError> {
        Ok(self.select(|u| u.surname.as_deref() == Some(surname)))
    }

    async fn find_by_pin_code(&self, pin_code: &str) -> Result<Vec<UserModel>, RepositoryError> {
        Ok(self.select(|u| u.pincode.as_deref() == Some(pin_code)))
    }

    async fn find_order_by_doj_asc(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let mut rows = self.select(|_| true);
        // nulls sort last, as Postgres orders them
        rows.sort_by_key(|u| (u.doj.is_none(), u.doj, u.user_id));
        Ok(rows)
    }

    async fn find_order_by_dob_asc(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let mut rows = self.select(|_| true);
        rows.sort_by_key(|u| (u.dob.is_none(), u.dob, u.user_id));
        Ok(rows)
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUserRepository {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let user = UserModel {
            user_id: *next_id,
            firstname: req.first_name.clone(),
            surname: req.surname.clone(),
            address: req.address.clone(),
            pincode: req.pin_code.clone(),
            dob: req.dob,
            doj: req.doj,
            deleted: req.deleted,
        };

        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        user_id: i32,
        req: &UpdateUserRequest,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|u| u.user_id == user_id) else {
            return Ok(None);
        };

        *row = UserModel {
            user_id,
            firstname: req.first_name.clone(),
            surname: req.surname.clone(),
            address: req.address.clone(),
            pincode: req.pin_code.clone(),
            dob: req.dob,
            doj: req.doj,
            deleted: req.deleted,
        };

        Ok(Some(row.clone()))
    }

    async fn delete(&self, user_id: i32) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.user_id != user_id);
        Ok(rows.len() < before)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_user(first_name: &str, surname: &str, pin_code: &str) -> CreateUserRequest {
    CreateUserRequest {
        first_name: Some(first_name.into()),
        surname: Some(surname.into()),
        address: Some("Bangalore".into()),
        pin_code: Some(pin_code.into()),
        dob: Some(date(2000, 1, 25)),
        doj: Some(date(2021, 8, 11)),
        deleted: 0,
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryUserRepository::default());
        let state = AppState::with_repositories(
            repo.clone() as DynUserQueryRepository,
            repo.clone() as DynUserCommandRepository,
        );

        Self {
            router: AppRouter::build(state),
            repo,
        }
    }

    /// Inserts straight into the store, bypassing HTTP.
    pub async fn seed(&self, req: CreateUserRequest) -> UserModel {
        self.repo.create(&req).await.unwrap()
    }
}

pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> anyhow::Result<T> {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}
