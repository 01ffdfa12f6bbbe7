//! 检测器核心：整合各分类检测器，输出单次扫描结果
use std::sync::Arc;
use tracing::debug;

use super::analyzer::{BackendLanguageDetector, TechnologyDetector, WebServerDetector};
use super::strategy::{strategy_for, DetectionStrategy};
use crate::compiler::CompiledRuleLibrary;
use crate::config::StrategyKind;
use crate::error::WsResult;
use crate::rule::{Detection, ResponseHeaders, ScanResult};

/// 技术检测器（纯逻辑，无任何输出）
#[derive(Debug, Clone)]
pub struct TechDetector {
    compiled_lib: Arc<CompiledRuleLibrary>,
    kind: StrategyKind,
    strategy: Arc<dyn DetectionStrategy>,
}

impl TechDetector {
    /// 使用内置规则库创建检测器
    pub fn new(kind: StrategyKind) -> WsResult<Self> {
        let compiled_lib = super::global::builtin_library()?;
        Ok(Self::with_library(compiled_lib, kind))
    }

    /// 使用指定规则库创建检测器
    pub fn with_library(compiled_lib: Arc<CompiledRuleLibrary>, kind: StrategyKind) -> Self {
        Self {
            compiled_lib,
            kind,
            strategy: strategy_for(kind),
        }
    }

    pub fn library(&self) -> &CompiledRuleLibrary {
        &self.compiled_lib
    }

    /// 核心检测接口（Body + Header）
    pub fn detect(&self, body: &str, headers: &ResponseHeaders) -> ScanResult {
        let server_banner = WebServerDetector::server_banner(headers).to_string();
        let web_server = self.detect_web_server(&server_banner);
        let frontend = self.detect_frontend(body, headers);
        let backend_language = self.detect_backend(body, headers);

        debug!(
            "检测完成 | 策略: {} | Server: {:?} | 前端: {:?} | 后端: {:?}",
            self.kind,
            web_server.as_ref().map(|d| &d.name),
            frontend.as_ref().map(|d| &d.name),
            backend_language.as_ref().map(|d| &d.name)
        );

        ScanResult::new(server_banner, web_server, frontend, backend_language)
    }

    pub fn detect_web_server(&self, server: &str) -> Option<Detection> {
        WebServerDetector::analyze(&self.compiled_lib.web_server, server)
    }

    pub fn detect_frontend(&self, body: &str, headers: &ResponseHeaders) -> Option<Detection> {
        TechnologyDetector::analyze(
            self.strategy.as_ref(),
            self.compiled_lib.frontend_table(self.kind),
            body,
            headers,
        )
    }

    pub fn detect_backend(&self, body: &str, headers: &ResponseHeaders) -> Option<Detection> {
        BackendLanguageDetector::analyze(
            self.strategy.as_ref(),
            self.compiled_lib.backend_table(self.kind),
            body,
            headers,
        )
    }

    /// 当前规则表下所有命中的前端技术
    pub fn detect_all_frontend(&self, body: &str) -> Vec<Detection> {
        TechnologyDetector::analyze_all(self.compiled_lib.frontend_table(self.kind), body)
    }
}
