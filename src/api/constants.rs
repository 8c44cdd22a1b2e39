//! API 模块常量定义

/// 请求体大小上限（字节）
pub const MAX_PAYLOAD_SIZE: usize = 64 * 1024;

pub const USERS_PATH: &str = "/users";
pub const BOOKMARKS_PATH: &str = "/bookmarks";
pub const API_KEYS_PATH: &str = "/api_keys";

/// Message for a body that is neither valid JSON nor valid form data
pub const INVALID_BODY_MESSAGE: &str = "Please check request data";
