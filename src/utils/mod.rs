pub mod password;
pub mod url_validator;

use std::iter;

/// Bookmark id alphabet
pub const BOOKMARK_ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const BOOKMARK_ID_LEN: usize = 6;

/// API key id and secret alphabet
pub const API_KEY_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const API_KEY_ID_LEN: usize = 24;
pub const API_KEY_SECRET_LEN: usize = 60;

/// 从给定字符集中均匀随机生成指定长度的字符串
pub fn generate_random_code(charset: &[u8], length: usize) -> String {
    iter::repeat_with(|| charset[rand::random_range(0..charset.len())] as char)
        .take(length)
        .collect()
}

pub fn generate_bookmark_id() -> String {
    generate_random_code(BOOKMARK_ID_CHARS, BOOKMARK_ID_LEN)
}

pub fn generate_api_key_id() -> String {
    generate_random_code(API_KEY_CHARS, API_KEY_ID_LEN)
}

pub fn generate_api_key_secret() -> String {
    generate_random_code(API_KEY_CHARS, API_KEY_SECRET_LEN)
}

/// Exactly six characters from `[a-z0-9]`
pub fn is_valid_bookmark_id(id: &str) -> bool {
    id.len() == BOOKMARK_ID_LEN && id.bytes().all(|b| BOOKMARK_ID_CHARS.contains(&b))
}
