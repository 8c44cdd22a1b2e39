use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Response body shared by every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Internal(String),
}

impl ServiceError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "E001",
            ServiceError::Unauthorized(_) => "E002",
            ServiceError::NotFound(_) => "E003",
            ServiceError::Conflict(_) => "E004",
            ServiceError::DatabaseConfig(_) => "E005",
            ServiceError::DatabaseConnection(_) => "E006",
            ServiceError::DatabaseOperation(_) => "E007",
            ServiceError::Internal(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "Bad Request",
            ServiceError::Unauthorized(_) => "Unauthorized",
            ServiceError::NotFound(_) => "Not Found",
            ServiceError::Conflict(_) => "Conflict",
            ServiceError::DatabaseConfig(_) => "Database Configuration Error",
            ServiceError::DatabaseConnection(_) => "Database Connection Error",
            ServiceError::DatabaseOperation(_) => "Database Operation Error",
            ServiceError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ServiceError::BadRequest(msg)
            | ServiceError::Unauthorized(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Conflict(msg)
            | ServiceError::DatabaseConfig(msg)
            | ServiceError::DatabaseConnection(msg)
            | ServiceError::DatabaseOperation(msg)
            | ServiceError::Internal(msg) => msg,
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::DatabaseConfig(_)
            | ServiceError::DatabaseConnection(_)
            | ServiceError::DatabaseOperation(_)
            | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Body sent to the client. Server-side details stay in the log.
    pub fn to_body(&self) -> ErrorBody {
        let status = self.http_status();
        let message = if status.is_server_error() {
            "The server encountered an internal error".to_string()
        } else {
            self.message().to_string()
        };

        ErrorBody {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            code: status.as_u16().to_string(),
            message,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        if self.http_status().is_server_error() {
            error!("{} ({})", self.format_simple(), self.code());
        }

        HttpResponse::build(self.http_status())
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(self.to_body())
    }
}

// 便捷的构造函数
impl ServiceError {
    pub fn bad_request<T: Into<String>>(msg: T) -> Self {
        ServiceError::BadRequest(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        ServiceError::Unauthorized(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ServiceError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        ServiceError::Conflict(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ServiceError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ServiceError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ServiceError::DatabaseOperation(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        ServiceError::Internal(msg.into())
    }

    /// Basic-auth header absent or not decodable
    pub fn missing_credentials() -> Self {
        ServiceError::Unauthorized("Missing or malformed Basic authentication credentials".into())
    }

    /// Credentials decoded but did not match a stored principal
    pub fn invalid_credentials() -> Self {
        ServiceError::Unauthorized("Please check your credentials".into())
    }

    /// Principal is authenticated but does not own the target resource
    pub fn not_owner() -> Self {
        ServiceError::Unauthorized("You are not authorized to access this resource".into())
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                ServiceError::Conflict(format!("Unique constraint violated: {}", detail))
            }
            _ => ServiceError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
