//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod api_keys;
mod bookmarks;
mod connection;
mod converters;
mod requests;
mod users;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, ServiceError};

pub use connection::{connect_generic, connect_sqlite, normalize_sqlite_url, run_migrations};

const SQLITE_FILE_EXTENSIONS: &[&str] = &[".db", ".sqlite", ".sqlite3"];

/// 从数据库 URL 推断数据库类型
///
/// Returns the backend name understood by [`SeaOrmStorage::new`]:
/// `sqlite`, `mysql` or `postgres`. Bare file paths count as SQLite.
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    let scheme = database_url.split_once(':').map(|(scheme, _)| scheme);

    let backend = match scheme {
        Some("sqlite") => "sqlite",
        Some("mysql" | "mariadb") => "mysql",
        Some("postgres" | "postgresql") => "postgres",
        _ if database_url == ":memory:"
            || SQLITE_FILE_EXTENSIONS
                .iter()
                .any(|ext| database_url.ends_with(ext)) =>
        {
            "sqlite"
        }
        _ => {
            return Err(ServiceError::database_config(format!(
                "Cannot infer the database backend from '{}'; expected sqlite://, *.db, mysql://, mariadb:// or postgres://",
                database_url
            )));
        }
    };

    Ok(backend.to_string())
}

/// SeaORM-based storage backend
///
/// Cheap to clone: the connection is a pool handle.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    /// 连接数据库并执行迁移
    pub async fn new(config: &DatabaseConfig, backend_name: &str) -> Result<Self> {
        let url = config.database_url.trim();
        if url.is_empty() {
            return Err(ServiceError::database_config("database_url is empty"));
        }

        let db = match backend_name {
            "sqlite" => connect_sqlite(url, config).await?,
            other => connect_generic(url, other, config).await?,
        };
        run_migrations(&db).await?;

        info!("{} storage ready", backend_name);
        Ok(Self {
            db,
            backend_name: backend_name.to_string(),
        })
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 关闭连接池
    pub async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| ServiceError::database_connection(format!("Failed to close database connections: {}", e)))
    }
}
