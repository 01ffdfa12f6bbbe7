//! 端到端扫描流程测试：本地HTTP服务 + 内存日志

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use webstalker::{
    ConfigManager, EvidenceSource, Level, MemoryLogger, StalkerError, StrategyKind, WebsiteScanner,
};

/// 启动只应答一次的本地HTTP服务
async fn serve_once(headers: &[(&str, &str)], body: &str) -> String {
    let mut response = String::from("HTTP/1.1 200 OK\r\n");
    for (k, v) in headers {
        response.push_str(&format!("{}: {}\r\n", k, v));
    }
    response.push_str(&format!(
        "Content-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{}/", addr)
}

fn scanner(strategy: StrategyKind, json: bool) -> WebsiteScanner {
    let config = ConfigManager::custom()
        .strategy(strategy)
        .output_json(json)
        .show_banner(false)
        .http_timeout(5)
        .build();
    WebsiteScanner::new(config).unwrap()
}

#[tokio::test]
async fn wordpress_on_nginx_end_to_end() {
    let url = serve_once(
        &[("Server", "nginx/1.18.0")],
        r#"<meta name="generator" content="WordPress 6.0">"#,
    )
    .await;

    let logger = MemoryLogger::new();
    let result = scanner(StrategyKind::Basic, true).run(&url, &logger).await.unwrap();

    assert_eq!(result.web_server().unwrap().name, "nginx");
    assert_eq!(result.frontend().unwrap().name, "WordPress");
    assert!(result.backend_language().is_none());

    let emitted = logger.emitted();
    assert_eq!(emitted.len(), 1);
    let value: Value = serde_json::from_str(&emitted[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "Web Server": "nginx",
            "Frontend": {"name": "WordPress", "detected_by": "WordPress"}
        })
    );

    assert!(logger.contains(Level::Success, "Detected web server: nginx"));
    assert!(logger.contains(Level::Warn, "No backend language detected."));
    assert!(logger.contains(Level::Info, "Scan completed."));
}

#[tokio::test]
async fn verbose_scan_reports_fetch_banner_and_technologies() {
    let url = serve_once(
        &[("Server", "nginx/1.18.0")],
        r#"<meta name="generator" content="WordPress 6.0">"#,
    )
    .await;

    let config = ConfigManager::custom()
        .verbose(true)
        .show_banner(false)
        .http_timeout(5)
        .build();
    let logger = MemoryLogger::new();
    WebsiteScanner::new(config).unwrap().run(&url, &logger).await.unwrap();

    assert!(logger.contains(Level::Info, &format!("Fetching content from {}", url)));
    assert!(logger.contains(Level::Success, "Web Server: nginx/1.18.0"));
    // 只命中一个标签时也要列出
    assert!(logger.contains(Level::Info, "Detected technologies: WordPress"));
}

#[tokio::test]
async fn quiet_scan_skips_verbose_lines() {
    let url = serve_once(&[("Server", "nginx/1.18.0")], "wp-content react").await;

    let logger = MemoryLogger::new();
    scanner(StrategyKind::Basic, false).run(&url, &logger).await.unwrap();

    assert!(!logger.contains(Level::Info, "Fetching content from"));
    assert!(!logger.contains(Level::Success, "Web Server: nginx/1.18.0"));
    assert!(!logger.contains(Level::Info, "Detected technologies:"));
}

#[tokio::test]
async fn header_only_backend_detection() {
    let url = serve_once(&[("X-Powered-By", "PHP/8.1")], "").await;

    let logger = MemoryLogger::new();
    let result = scanner(StrategyKind::Basic, false).run(&url, &logger).await.unwrap();

    let backend = result.backend_language().unwrap();
    assert_eq!(backend.name, "PHP");
    assert_eq!(backend.source, EvidenceSource::Headers);
    assert!(result.web_server().is_none());
    assert!(logger.contains(Level::Warn, "No known web server detected."));
    assert!(logger.emitted().is_empty());
}

#[tokio::test]
async fn context_strategy_needs_corroborating_keywords() {
    let body = "<script>var react = window.React;</script>";
    let url = serve_once(&[("Server", "Apache")], body).await;

    let logger = MemoryLogger::new();
    let result = scanner(StrategyKind::Context, false).run(&url, &logger).await.unwrap();
    assert!(result.frontend().is_none());
    assert_eq!(result.web_server().unwrap().name, "Apache");

    let url = serve_once(&[], r#"<script src="/js/react-dom.production.min.js"></script>"#).await;
    let logger = MemoryLogger::new();
    let result = scanner(StrategyKind::Context, false).run(&url, &logger).await.unwrap();
    let frontend = result.frontend().unwrap();
    assert_eq!(frontend.name, "React");
    assert!(frontend.context.as_deref().unwrap().contains("react-dom"));
    assert!(logger.contains(Level::Success, "Detected Frontend: React"));
}

#[tokio::test]
async fn nothing_detected_is_not_an_error() {
    let url = serve_once(&[("Server", "cloudflare")], "<html><body>hello</body></html>").await;

    let logger = MemoryLogger::new();
    let result = scanner(StrategyKind::Basic, true).run(&url, &logger).await.unwrap();
    assert!(result.is_empty());
    assert_eq!(result.server_banner(), "cloudflare");
    assert!(logger.contains(Level::Warn, "No technologies detected."));
    assert_eq!(logger.emitted(), vec!["{}".to_string()]);
}

#[tokio::test]
async fn connection_refused_aborts_scan() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let logger = MemoryLogger::new();
    let err = scanner(StrategyKind::Basic, true)
        .run(&format!("http://{}/", addr), &logger)
        .await
        .unwrap_err();

    assert!(matches!(err, StalkerError::Fetch(_)));
    assert!(logger.contains(Level::Error, "Connection error:"));
    assert!(logger.contains(Level::Warn, "Failed to retrieve website content."));
    assert!(!logger.contains(Level::Info, "Analyzing"));
    assert!(logger.emitted().is_empty());
}

#[tokio::test]
async fn invalid_url_is_rejected_before_fetch() {
    let logger = MemoryLogger::new();
    let err = scanner(StrategyKind::Basic, true)
        .run("not a url", &logger)
        .await
        .unwrap_err();

    assert!(matches!(err, StalkerError::UrlError(_)));
    assert!(logger.contains(Level::Error, "Invalid URL"));
    assert!(logger.emitted().is_empty());
}
