//! 外部 URL 探测
//!
//! 创建书签前对目标 URL 发起一次 GET 请求，确认可达并取得重定向后的最终地址。
//! ureq 是同步客户端，请求在 `spawn_blocking` 中执行。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::{Agent, ResponseExt};

use crate::config::FetchConfig;

/// Categorized failure of the verification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Terminal response was outside 2xx/3xx
    HttpStatus(u16),
    Timeout,
    Unreachable(String),
    TooManyRedirects,
    Other(String),
}

impl FetchError {
    /// 返回给客户端的消息
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpStatus(code) => {
                format!("The URL responded with HTTP status {}", code)
            }
            Self::Timeout => "The URL did not respond in time".to_string(),
            Self::Unreachable(_) => "Could not connect to the URL".to_string(),
            Self::TooManyRedirects => "The URL redirected too many times".to_string(),
            Self::Other(_) => "The URL could not be retrieved".to_string(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP status {}", code),
            Self::Timeout => write!(f, "request timed out"),
            Self::Unreachable(msg) => write!(f, "unreachable: {}", msg),
            Self::TooManyRedirects => write!(f, "too many redirects"),
            Self::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for crate::errors::ServiceError {
    fn from(err: FetchError) -> Self {
        crate::errors::ServiceError::bad_request(err.user_message())
    }
}

/// 解析 URL 的最终地址
#[async_trait]
pub trait UrlResolver: Send + Sync {
    /// GET `url`. With `follow_redirects` the returned URL is the final one
    /// after redirects, otherwise it is `url` itself.
    async fn resolve(&self, url: &str, follow_redirects: bool) -> Result<String, FetchError>;

    /// 获取 resolver 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// ureq-backed resolver
pub struct HttpUrlResolver {
    following: Agent,
    direct: Agent,
    user_agent: String,
}

impl HttpUrlResolver {
    pub fn new(config: &FetchConfig) -> Self {
        let timeout = Some(Duration::from_secs(config.timeout_secs));

        let following = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .max_redirects(config.max_redirects)
            .build()
            .into();

        // 不跟随重定向：3xx 原样返回
        let direct = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .into();

        Self {
            following,
            direct,
            user_agent: config.user_agent(),
        }
    }

    fn resolve_sync(
        agent: Agent,
        user_agent: String,
        url: String,
        follow_redirects: bool,
    ) -> Result<String, FetchError> {
        let response = agent
            .get(&url)
            .header("User-Agent", user_agent.as_str())
            .call()
            .map_err(classify_error)?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        if follow_redirects {
            let final_url = response.get_uri().to_string();
            debug!("Resolved {} -> {} ({})", url, final_url, status);
            Ok(final_url)
        } else {
            debug!("Verified {} ({})", url, status);
            Ok(url)
        }
    }
}

#[async_trait]
impl UrlResolver for HttpUrlResolver {
    async fn resolve(&self, url: &str, follow_redirects: bool) -> Result<String, FetchError> {
        let agent = if follow_redirects {
            self.following.clone()
        } else {
            self.direct.clone()
        };
        let user_agent = self.user_agent.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || {
            Self::resolve_sync(agent, user_agent, url, follow_redirects)
        })
        .await
        .unwrap_or_else(|e| {
            warn!("URL fetch spawn_blocking failed: {}", e);
            Err(FetchError::Other(e.to_string()))
        })
    }

    fn name(&self) -> &'static str {
        "ureq"
    }
}

fn classify_error(err: ureq::Error) -> FetchError {
    use std::io::ErrorKind;

    match err {
        ureq::Error::StatusCode(code) => FetchError::HttpStatus(code),
        ureq::Error::Timeout(_) => FetchError::Timeout,
        ureq::Error::TooManyRedirects => FetchError::TooManyRedirects,
        ureq::Error::HostNotFound => FetchError::Unreachable("host not found".to_string()),
        ureq::Error::ConnectionFailed => FetchError::Unreachable("connection failed".to_string()),
        ureq::Error::Io(e) => match e.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => FetchError::Timeout,
            ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::AddrNotAvailable => FetchError::Unreachable(e.to_string()),
            _ => FetchError::Other(e.to_string()),
        },
        other => FetchError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status_and_redirects() {
        assert_eq!(
            classify_error(ureq::Error::StatusCode(404)),
            FetchError::HttpStatus(404)
        );
        assert_eq!(
            classify_error(ureq::Error::TooManyRedirects),
            FetchError::TooManyRedirects
        );
    }

    #[test]
    fn test_classify_io_errors() {
        let refused = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        assert!(matches!(
            classify_error(ureq::Error::Io(refused)),
            FetchError::Unreachable(_)
        ));

        let timed_out = std::io::Error::from(std::io::ErrorKind::TimedOut);
        assert_eq!(classify_error(ureq::Error::Io(timed_out)), FetchError::Timeout);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            FetchError::HttpStatus(503).user_message(),
            "The URL responded with HTTP status 503"
        );
        assert_eq!(
            FetchError::Unreachable("refused".into()).user_message(),
            "Could not connect to the URL"
        );
    }
}
