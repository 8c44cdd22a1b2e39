//! Service layer for business logic
//!
//! Shared by the HTTP handlers, the authorization guards and the CLI.

mod api_key_service;
mod auth_service;
mod bookmark_service;
pub mod fetcher;
mod user_service;

pub use api_key_service::ApiKeyService;
pub use auth_service::AuthService;
pub use bookmark_service::{BookmarkService, CreateBookmarkRequest};
pub use fetcher::{FetchError, HttpUrlResolver, UrlResolver};
pub use user_service::{CreateUserRequest, MAX_EMAIL_LEN, MAX_NAME_LEN, UserService};
