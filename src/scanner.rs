//! 扫描流程：拉取 → Server检测 → 前端检测 → 后端检测 → 输出
use tracing::debug;

use crate::config::{ScanConfig, StrategyKind};
use crate::detector::TechDetector;
use crate::error::{StalkerError, WsResult};
use crate::fetcher::{validate_url, PageFetcher};
use crate::reporter::{Logger, ScanReporter, BANNER};
use crate::rule::{Detection, ScanResult};

/// 单站点扫描器
#[derive(Debug, Clone)]
pub struct WebsiteScanner {
    config: ScanConfig,
    fetcher: PageFetcher,
    detector: TechDetector,
}

impl WebsiteScanner {
    pub fn new(config: ScanConfig) -> WsResult<Self> {
        let fetcher = PageFetcher::new(&config)?;
        let detector = TechDetector::new(config.strategy)?;
        Ok(Self { config, fetcher, detector })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// 执行一次完整扫描；拉取失败时不做任何分析，也不输出JSON
    pub async fn run(&self, url: &str, logger: &dyn Logger) -> WsResult<ScanResult> {
        if self.config.show_banner {
            logger.banner(BANNER);
        }
        logger.info(&format!("Starting scan for website: {}", url));

        let target = match validate_url(url) {
            Ok(target) => target,
            Err(e) => {
                logger.error(&format!("Invalid URL: {}", e));
                return Err(e);
            }
        };

        if self.config.verbose {
            logger.info(&format!("Fetching content from {}", target));
        }
        let page = match self.fetcher.fetch(target.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                logger.error(&format!("Connection error: {}", e));
                logger.warn("Failed to retrieve website content.");
                return Err(StalkerError::Fetch(e));
            }
        };

        let result = self.detector.detect(&page.body, &page.headers);
        debug!("扫描结果：{:?}", result);

        if self.config.verbose {
            logger.success(&format!("Web Server: {}", result.server_banner()));
        }
        self.log_web_server(logger, result.web_server());
        self.log_frontend(logger, result.frontend(), &page.body);
        self.log_backend(logger, result.backend_language());

        ScanReporter::report(logger, &result, self.config.output_json)?;
        logger.info("Scan completed.");

        Ok(result)
    }

    fn log_web_server(&self, logger: &dyn Logger, detection: Option<&Detection>) {
        logger.info("Analyzing web server information.");
        match detection {
            Some(d) => logger.success(&format!("Detected web server: {}", d.name)),
            None => logger.warn("No known web server detected."),
        }
    }

    fn log_frontend(&self, logger: &dyn Logger, detection: Option<&Detection>, body: &str) {
        logger.info("Analyzing website content for technology patterns.");
        match detection {
            Some(d) => match &d.context {
                Some(context) => logger.success(&format!("Detected Frontend: {} (Context: {})", d.name, context)),
                None => logger.success(&format!("Frontend: {} (Detected by: {})", d.name, d.detected_by)),
            },
            None => logger.warn("No frontend technologies detected."),
        }

        if self.config.verbose {
            let all = self.detector.detect_all_frontend(body);
            if !all.is_empty() {
                let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
                logger.info(&format!("Detected technologies: {}", names.join(", ")));
            }
        }
    }

    fn log_backend(&self, logger: &dyn Logger, detection: Option<&Detection>) {
        let message = match self.config.strategy {
            StrategyKind::Context => "Analyzing website headers and content for backend language.",
            StrategyKind::Basic | StrategyKind::Signature => {
                "Analyzing website content and headers for backend language patterns."
            }
        };
        logger.info(message);
        match detection {
            Some(d) => logger.success(&format!(
                "Language: {} (Detected in {} by: {})",
                d.name,
                d.source,
                d.context.as_deref().unwrap_or(&d.detected_by)
            )),
            None => logger.warn("No backend language detected."),
        }
    }
}
