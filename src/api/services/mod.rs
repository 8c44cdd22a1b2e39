pub mod api_keys;
pub mod bookmarks;
pub mod front;
pub mod helpers;
pub mod routes;
pub mod types;
pub mod users;

pub use routes::configure;
pub use types::*;
