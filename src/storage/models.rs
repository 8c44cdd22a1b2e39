use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 注册用户
///
/// `password_hash` never leaves the process; responses use `UserResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields needed to insert a user, with the password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperUser {
    pub id: i32,
    pub password_hash: String,
}

/// API key credential pair. The secret is stored as issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub secret: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub user_id: i32,
}

/// 书签访问记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLog {
    pub id: i64,
    pub bookmark_id: String,
    pub ip: Option<String>,
    pub accessed_at: DateTime<Utc>,
}
