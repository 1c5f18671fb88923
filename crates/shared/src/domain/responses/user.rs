use crate::model::user::UserModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i32,
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
    pub deleted: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteUserResponse {
    pub status: String,
    pub message: String,
}

// model to response
impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        UserResponse {
            user_id: value.user_id,
            first_name: value.firstname,
            surname: value.surname,
            address: value.address,
            pin_code: value.pincode,
            dob: value.dob,
            doj: value.doj,
            deleted: value.deleted,
        }
    }
}
