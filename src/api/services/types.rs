//! Request and response bodies

use serde::{Deserialize, Deserializer, Serialize};

use crate::storage::{ApiKey, Bookmark, User};

// ============ Request bodies ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookmarkForm {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub follow_redirects: bool,
}

/// Boolean accepted as a JSON bool, a number, or one of
/// "true"/"1"/"yes"/"on" (case-insensitive). Anything else is false.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        Some(Flag::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        None => false,
    })
}

// ============ Response bodies ============

/// Public view of a user, without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub url: String,
    pub user_id: i32,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            url: bookmark.url,
            user_id: bookmark.user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    pub id: String,
    pub secret: String,
    pub user_id: i32,
}

impl From<ApiKey> for ApiKeyResponse {
    fn from(key: ApiKey) -> Self {
        Self {
            id: key.id,
            secret: key.secret,
            user_id: key.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkEnvelope {
    pub bookmark: BookmarkResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarksEnvelope {
    pub bookmarks: Vec<BookmarkResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyEnvelope {
    pub api_key: ApiKeyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeysEnvelope {
    pub api_keys: Vec<ApiKeyResponse>,
}
