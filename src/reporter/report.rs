//! 扫描结果汇总输出：控制台结果行 + 可选JSON

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::messages::{Level, Logger};
use crate::error::WsResult;
use crate::rule::{Category, EvidenceSource, ScanResult};

/// JSON输出结构（键顺序固定）
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(rename = "Web Server", skip_serializing_if = "Option::is_none")]
    web_server: Option<&'a str>,
    #[serde(rename = "Frontend", skip_serializing_if = "Option::is_none")]
    frontend: Option<FrontendEntry<'a>>,
    #[serde(rename = "Backend Language", skip_serializing_if = "Option::is_none")]
    backend_language: Option<BackendEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct FrontendEntry<'a> {
    name: &'a str,
    detected_by: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct BackendEntry<'a> {
    name: &'a str,
    source: EvidenceSource,
    detected_by: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
}

impl<'a> From<&'a ScanResult> for JsonReport<'a> {
    fn from(result: &'a ScanResult) -> Self {
        Self {
            web_server: result.web_server().map(|d| d.name.as_str()),
            frontend: result.frontend().map(|d| FrontendEntry {
                name: &d.name,
                detected_by: &d.detected_by,
                context: d.context.as_deref(),
            }),
            backend_language: result.backend_language().map(|d| BackendEntry {
                name: &d.name,
                source: d.source,
                detected_by: &d.detected_by,
                context: d.context.as_deref(),
            }),
        }
    }
}

/// 结果输出器
pub struct ScanReporter;

impl ScanReporter {
    /// 结果汇总行，无任何检测结果时为一条警告
    pub fn summary_lines(result: &ScanResult) -> Vec<(Level, String)> {
        if result.is_empty() {
            return vec![(Level::Warn, "No technologies detected.".to_string())];
        }

        let mut lines = vec![(Level::Info, "Scan results:".to_string())];
        for (category, detection) in result.entries() {
            let line = match category {
                Category::WebServer => format!("{}: {}", category, detection.name),
                Category::Frontend | Category::BackendLanguage => {
                    format!("{}: {}", category, detection)
                }
            };
            lines.push((Level::Success, line));
        }
        lines
    }

    /// 序列化为JSON（4空格缩进）
    pub fn to_json(result: &ScanResult) -> WsResult<String> {
        let report = JsonReport::from(result);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        report.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// 输出结果行，按需追加JSON
    pub fn report(logger: &dyn Logger, result: &ScanResult, output_json: bool) -> WsResult<()> {
        for (level, line) in Self::summary_lines(result) {
            logger.log(level, &line);
        }
        if output_json {
            logger.emit(&Self::to_json(result)?);
        }
        Ok(())
    }
}
