mod user;

pub use self::user::{DeleteUserResponse, UserResponse};
