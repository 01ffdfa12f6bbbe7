//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use url::ParseError as UrlParseError;

/// 页面拉取错误（对扫描是致命的，不做重试）
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// 按 reqwest 错误类型归类
    pub fn from_reqwest(url: &str, secs: u64, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            FetchError::Timeout { url, secs }
        } else if err.is_connect() {
            FetchError::Connect { url, source: err }
        } else if let Some(status) = err.status() {
            FetchError::Status { url, status: status.as_u16() }
        } else {
            FetchError::Request { url, source: err }
        }
    }
}

#[derive(Error, Debug)]
pub enum StalkerError {
    // 网络相关错误
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("failed to build HTTP client: {0}")]
    HttpClientError(String),

    // 规则相关错误
    #[error("invalid pattern: {0}")]
    RegexCompileError(#[from] RegexError),
    #[error("rule table error: {0}")]
    RuleTableError(String),

    // 序列化错误
    #[error("failed to serialize scan result: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("invalid URL: {0}")]
    UrlError(#[from] UrlParseError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type WsResult<T> = Result<T, StalkerError>;
