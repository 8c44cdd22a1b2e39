use migration::entities::{api_key, bookmark, request_log, super_user, user};

use crate::storage::models::{ApiKey, Bookmark, NewUser, RequestLog, SuperUser, User};

pub fn model_to_user(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
    }
}

/// id 由数据库分配
pub fn new_user_to_active_model(user: &NewUser) -> user::ActiveModel {
    use sea_orm::ActiveValue::*;

    user::ActiveModel {
        id: NotSet,
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
    }
}

pub fn model_to_super_user(model: super_user::Model) -> SuperUser {
    SuperUser {
        id: model.id,
        password_hash: model.password_hash,
    }
}

pub fn model_to_api_key(model: api_key::Model) -> ApiKey {
    ApiKey {
        id: model.id,
        secret: model.secret,
        user_id: model.user_id,
    }
}

pub fn api_key_to_active_model(key: &ApiKey) -> api_key::ActiveModel {
    use sea_orm::ActiveValue::*;

    api_key::ActiveModel {
        id: Set(key.id.clone()),
        secret: Set(key.secret.clone()),
        user_id: Set(key.user_id),
    }
}

pub fn model_to_bookmark(model: bookmark::Model) -> Bookmark {
    Bookmark {
        id: model.id,
        url: model.url,
        user_id: model.user_id,
    }
}

pub fn bookmark_to_active_model(bookmark: &Bookmark) -> bookmark::ActiveModel {
    use sea_orm::ActiveValue::*;

    bookmark::ActiveModel {
        id: Set(bookmark.id.clone()),
        url: Set(bookmark.url.clone()),
        user_id: Set(bookmark.user_id),
    }
}

pub fn model_to_request_log(model: request_log::Model) -> RequestLog {
    RequestLog {
        id: model.id,
        bookmark_id: model.bookmark_id,
        ip: model.ip,
        accessed_at: model.accessed_at,
    }
}
