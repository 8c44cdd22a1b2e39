pub mod api_key;
pub mod bookmark;
pub mod request_log;
pub mod super_user;
pub mod user;

pub use api_key::Entity as ApiKeyEntity;
pub use bookmark::Entity as BookmarkEntity;
pub use request_log::Entity as RequestLogEntity;
pub use super_user::Entity as SuperUserEntity;
pub use user::Entity as UserEntity;
