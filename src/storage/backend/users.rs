//! User and super-user persistence

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{model_to_super_user, model_to_user, new_user_to_active_model};
use crate::errors::{Result, ServiceError};
use crate::storage::models::{NewUser, SuperUser, User};

use migration::entities::{super_user, user};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email already exists";

impl SeaOrmStorage {
    /// 创建用户
    ///
    /// The email is checked first; the unique index still catches a
    /// concurrent insert and that also surfaces as `Conflict`.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        if self.find_user_by_email(&new_user.email).await?.is_some() {
            return Err(ServiceError::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let user = self.insert_user(new_user).await?;
        info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    async fn insert_user(&self, new_user: &NewUser) -> Result<User> {
        let model = new_user_to_active_model(new_user)
            .insert(&self.db)
            .await
            .map_err(|e| match ServiceError::from(e) {
                ServiceError::Conflict(_) => ServiceError::conflict(DUPLICATE_EMAIL_MESSAGE),
                other => other,
            })?;
        Ok(model_to_user(model))
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_user))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_user))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Loaded {} users", models.len());
        Ok(models.into_iter().map(model_to_user).collect())
    }

    pub async fn get_super_user(&self, id: i32) -> Result<Option<SuperUser>> {
        let model = super_user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_super_user))
    }

    /// 创建或重置超级用户密码
    pub async fn upsert_super_user(&self, id: i32, password_hash: &str) -> Result<SuperUser> {
        use sea_orm::ActiveValue::Set;

        let existing = super_user::Entity::find_by_id(id).one(&self.db).await?;
        let model = match existing {
            Some(model) => {
                let mut active: super_user::ActiveModel = model.into();
                active.password_hash = Set(password_hash.to_string());
                active.update(&self.db).await?
            }
            None => {
                super_user::ActiveModel {
                    id: Set(id),
                    password_hash: Set(password_hash.to_string()),
                }
                .insert(&self.db)
                .await?
            }
        };

        info!("Super user {} password set", id);
        Ok(model_to_super_user(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    async fn temp_storage() -> (SeaOrmStorage, tempfile::TempDir) {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let config = DatabaseConfig {
            database_url: format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display()),
            ..Default::default()
        };
        let storage = SeaOrmStorage::new(&config, "sqlite").await.expect("storage");
        (storage, dir)
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ada".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unique_email_index_is_conflict() {
        let (storage, _dir) = temp_storage().await;
        storage.insert_user(&new_user("ada@example.com")).await.expect("first insert");

        // skips the lookup in create_user, so only the unique index can object
        let err = storage
            .insert_user(&new_user("ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {:?}", err);
        assert_eq!(err.message(), DUPLICATE_EMAIL_MESSAGE);

        let raw = new_user_to_active_model(&new_user("ada@example.com"))
            .insert(&storage.db)
            .await
            .unwrap_err();
        assert!(matches!(ServiceError::from(raw), ServiceError::Conflict(_)));

        assert_eq!(storage.list_users().await.expect("list").len(), 1);
    }
}
