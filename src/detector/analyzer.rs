//! 分类检测器：Server头 / 前端 / 后端语言
use tracing::debug;

use super::strategy::DetectionStrategy;
use crate::compiler::RuleTable;
use crate::rule::{Detection, EvidenceSource, ResponseHeaders};

/// Server头缺失时的占位值
pub const UNKNOWN_SERVER: &str = "Unknown";

/// Web服务器检测器
pub struct WebServerDetector;

impl WebServerDetector {
    /// 取Server头，缺失时为"Unknown"
    pub fn server_banner(headers: &ResponseHeaders) -> &str {
        headers.get("Server").unwrap_or(UNKNOWN_SERVER)
    }

    /// 按表顺序匹配Server值，未命中不视为错误
    pub fn analyze(table: &RuleTable, server: &str) -> Option<Detection> {
        for rule in table {
            if let Some(m) = rule.find(server) {
                debug!("[Server]匹配成功 | 技术: {} | 内容: {} | 规则: {}", rule.label, server, rule.describe());
                return Some(Detection::new(&rule.label, EvidenceSource::Headers, m.as_str()));
            }
        }
        debug!("[Server]无匹配 | 内容: {}", server);
        None
    }
}

/// 前端/CMS检测器
pub struct TechnologyDetector;

impl TechnologyDetector {
    /// 单槽位检测，首个被策略接受的技术胜出
    pub fn analyze(
        strategy: &dyn DetectionStrategy,
        table: &RuleTable,
        body: &str,
        headers: &ResponseHeaders,
    ) -> Option<Detection> {
        strategy.detect(body, headers, table)
    }

    /// 列出所有命中的技术（不受单槽位限制，仅用于展示）
    pub fn analyze_all(table: &RuleTable, body: &str) -> Vec<Detection> {
        table
            .iter()
            .filter_map(|rule| {
                rule.find(body)
                    .map(|m| Detection::new(&rule.label, EvidenceSource::Body, m.as_str()))
            })
            .collect()
    }
}

/// 后端语言检测器
pub struct BackendLanguageDetector;

impl BackendLanguageDetector {
    pub fn analyze(
        strategy: &dyn DetectionStrategy,
        table: &RuleTable,
        body: &str,
        headers: &ResponseHeaders,
    ) -> Option<Detection> {
        strategy.detect(body, headers, table)
    }
}
