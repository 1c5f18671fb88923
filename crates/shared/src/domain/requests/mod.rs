mod user;

pub use self::user::{CreateUserRequest, UpdateUserRequest};
