//! 页面拉取：单次GET，固定UA与超时，不重试

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::ScanConfig;
use crate::error::{FetchError, StalkerError, WsResult};
use crate::rule::ResponseHeaders;
use crate::utils::HeaderConverter;

/// 拉取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
    pub headers: ResponseHeaders,
}

/// 校验目标URL：必须是 http/https 绝对地址
pub fn validate_url(raw: &str) -> WsResult<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(StalkerError::InvalidInput(format!(
                "unsupported URL scheme '{}', expected http or https",
                other
            )));
        }
    }
    if url.host_str().is_none() {
        return Err(StalkerError::InvalidInput(format!("URL has no host: {}", raw)));
    }
    Ok(url)
}

/// 页面拉取器
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout_secs: u64,
}

impl PageFetcher {
    pub fn new(config: &ScanConfig) -> WsResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| StalkerError::HttpClientError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.http_timeout,
        })
    }

    /// 拉取页面正文与响应头；网络错误、超时、4xx/5xx 均返回 FetchError
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        debug!("开始拉取：{}，超时{}秒", url, self.timeout_secs);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            warn!("拉取失败：{} 返回状态码 {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // 跟随重定向后的最终URL，仅用于诊断日志
        let response_url = response.url().to_string();
        let headers = HeaderConverter::to_response_headers(response.headers());
        let body = response.text().await.map_err(|e| self.classify(url, e))?;

        debug!(
            "拉取完成：{}，状态码{}，正文{}字节，Header{}条",
            response_url,
            status.as_u16(),
            body.len(),
            headers.len()
        );

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
            headers,
        })
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        warn!("拉取失败：{}，错误：{}", url, err);
        FetchError::from_reqwest(url, self.timeout_secs, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// 启动只应答一次的本地HTTP服务，返回地址
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            // 回显请求中的UA，便于断言
            let ua = request
                .lines()
                .find(|l| l.to_ascii_lowercase().starts_with("user-agent:"))
                .map(|l| l["user-agent:".len()..].trim().to_string())
                .unwrap_or_default();
            let response = response.replace("{UA}", &ua);
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/", addr)
    }

    fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
        let mut out = format!("HTTP/1.1 {}\r\n", status);
        for (k, v) in headers {
            out.push_str(&format!("{}: {}\r\n", k, v));
        }
        out.push_str(&format!("Content-Length: {}\r\nConnection: close\r\n\r\n{}", body.len(), body));
        out
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("  http://example.com/path ").is_ok());
        assert!(matches!(validate_url("example.com"), Err(StalkerError::UrlError(_))));
        assert!(matches!(validate_url("ftp://example.com"), Err(StalkerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_headers() {
        let url = serve_once(http_response(
            "200 OK",
            &[("Server", "nginx/1.18.0"), ("X-Echo-UA", "{UA}")],
            "<html>wp-content</html>",
        ))
        .await;

        let fetcher = PageFetcher::new(&ConfigManager::get_default()).unwrap();
        let page = fetcher.fetch(&url).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<html>wp-content</html>");
        assert_eq!(page.headers.get("Server"), Some("nginx/1.18.0"));
        assert!(page.headers.get("x-echo-ua").unwrap().contains("Chrome/91.0.4472.124"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let url = serve_once(http_response("503 Service Unavailable", &[], "down")).await;

        let fetcher = PageFetcher::new(&ConfigManager::get_default()).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = PageFetcher::new(&ConfigManager::get_default()).unwrap();
        let err = fetcher.fetch(&format!("http://{}/", addr)).await.unwrap_err();
        assert!(matches!(err, FetchError::Connect { .. } | FetchError::Request { .. }));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        // 接受连接但不应答
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        });

        let config = ConfigManager::custom().http_timeout(1).build();
        let fetcher = PageFetcher::new(&config).unwrap();
        let err = fetcher.fetch(&format!("http://{}/", addr)).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { secs: 1, .. }));
    }
}
