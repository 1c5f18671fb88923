use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /user`. Every field may be omitted or null; a `userId` sent by
/// the client is ignored since the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
    #[serde(default)]
    pub deleted: i32,
}

/// Body of `PUT /user`. Replaces every column of the row identified by `user_id`,
/// so an omitted field is stored as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: Option<i32>,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
    #[serde(default)]
    pub deleted: i32,
}
