use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserModel {
    pub user_id: i32,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
    pub deleted: i32,
}
