use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ServiceError};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: 监听地址、端口、worker 数量
/// - database: 数据库连接配置
/// - fetch: 创建书签时对目标 URL 的探测请求
/// - auth: 超级用户 id
/// - logging: 日志配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub fetch: FetchConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    /// ENV 前缀：BM，分隔符：__
    /// 示例：BM__SERVER__PORT=9999
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("BM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ServiceError::internal(format!("Failed to build config: {}", e)))?;

        settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| ServiceError::internal(format!("Failed to deserialize config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ServiceError::internal(format!("Failed to serialize config: {}", e)))
    }

    /// 默认配置渲染成 TOML
    pub fn generate_sample_config() -> Result<String> {
        Self::default().to_toml()
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HTTP worker 数量，默认等于 CPU 核数
    pub workers: usize,
    /// `GET /` 返回的纯文本
    pub welcome_message: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            workers: num_cpus::get(),
            welcome_message: "Welcome to the bookmarks web service API. \
                              More info will be added here in the future in case you are lost."
                .into(),
        }
    }
}

/// 数据库连接配置
///
/// `database_url` 决定后端：`sqlite://`、`*.db`、`mysql://`、`postgres://`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub pool_size: u32,
    /// 获取连接的超时（秒）
    pub timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "bookmarks.db".into(),
            pool_size: 10,
            timeout: 30,
        }
    }
}

/// Outbound URL verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent_name: String,
    pub timeout_secs: u64,
    pub max_redirects: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent_name: "bookmarks_service".into(),
            timeout_secs: 5,
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    /// `<user_agent_name>/<crate version>`
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.user_agent_name, env!("CARGO_PKG_VERSION"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub super_user_id: i32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { super_user_id: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 日志配置
///
/// `file` 为空时输出到 stdout；`RUST_LOG` 优先于 `level`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<String>,
    /// 按天滚动时保留的文件数
    pub max_backups: u32,
    pub enable_rotation: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Text,
            file: None,
            max_backups: 5,
            enable_rotation: true,
        }
    }
}
