//! エラー型定義

use thiserror::Error;

/// 作品一覧の取得失敗
///
/// 呼び出し箇所で捕捉してログに出すだけで、UIには伝播させない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(FetchError::Status(503).to_string(), "unexpected HTTP status: 503");
        assert!(FetchError::Malformed("missing field `data`".to_string())
            .to_string()
            .contains("missing field"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(error.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("page_size must be at least 1".to_string());
        assert_eq!(error.to_string(), "Config error: page_size must be at least 1");
    }

    #[test]
    fn test_error_from_fetch() {
        let error: Error = FetchError::Status(404).into();
        assert!(matches!(error, Error::Fetch(FetchError::Status(404))));
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Storage("QuotaExceededError".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Storage"));
        assert!(debug.contains("QuotaExceededError"));
    }
}
