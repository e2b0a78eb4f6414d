//! 错误类型定义

use thiserror::Error;

/// 共享错误类型
///
/// 搜索/详情/评论接口的失败最终都以错误消息文本呈现给界面；
/// 持久化层的失败不会进入这里（静默降级，见 storage 模块）
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP {status}: {url}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = Error::Http {
            status: 502,
            url: "/api/poems_search".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 502: /api/poems_search");
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("连接被重置".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("连接被重置"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Decode("字段类型不符".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Decode"));
        assert!(debug.contains("字段类型不符"));
    }
}
