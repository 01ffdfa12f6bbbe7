//! 检测策略：同一接口下可互换的匹配实现
//! 规则表决定参与匹配的数据范围（仅正文 / 正文+Header），策略决定证据的采信方式

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::compiler::{MatchRule, RuleTable};
use crate::config::StrategyKind;
use crate::rule::{Detection, EvidenceSource, ResponseHeaders};
use crate::utils::{ContextWindow, CONTEXT_RADIUS};

/// 所有检测策略的通用抽象
pub trait DetectionStrategy: fmt::Debug + Send + Sync {
    /// 策略名称，用于日志
    fn name(&self) -> &'static str;

    /// 按表顺序检测，单个分类最多返回一条结果
    fn detect(&self, body: &str, headers: &ResponseHeaders, table: &RuleTable) -> Option<Detection>;
}

/// 根据配置创建策略实例
pub fn strategy_for(kind: StrategyKind) -> Arc<dyn DetectionStrategy> {
    match kind {
        StrategyKind::Basic => Arc::new(BasicStrategy),
        StrategyKind::Context => Arc::new(ContextStrategy::default()),
        StrategyKind::Signature => Arc::new(HeaderFirstStrategy),
    }
}

/// 正文命中优先，其次Header（规则表允许时）
fn match_rule(rule: &MatchRule, body: &str, headers: &ResponseHeaders, scope_headers: bool) -> Option<Detection> {
    if let Some(m) = rule.find(body) {
        return Some(Detection::new(&rule.label, EvidenceSource::Body, m.as_str()));
    }
    if scope_headers {
        if let Some(value) = rule.first_matching_value(headers) {
            return Some(Detection::new(&rule.label, EvidenceSource::Headers, value));
        }
    }
    None
}

/// 基础策略：首个命中即返回
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl DetectionStrategy for BasicStrategy {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn detect(&self, body: &str, headers: &ResponseHeaders, table: &RuleTable) -> Option<Detection> {
        let scope_headers = table.scope.includes_headers();
        for rule in table {
            if let Some(detection) = match_rule(rule, body, headers, scope_headers) {
                debug!(
                    "[{}]匹配成功 | 分类: {} | 技术: {} | 来源: {} | 内容: {} | 规则: {}",
                    self.name(),
                    table.category,
                    detection.name,
                    detection.source,
                    detection.detected_by,
                    rule.describe()
                );
                return Some(detection);
            }
        }
        None
    }
}

/// 上下文校验策略：正文命中需在窗口内出现关联关键字，Header命中直接采信
#[derive(Debug, Clone, Copy)]
pub struct ContextStrategy {
    pub radius: usize,
}

impl Default for ContextStrategy {
    fn default() -> Self {
        Self { radius: CONTEXT_RADIUS }
    }
}

impl ContextStrategy {
    /// 遍历全部不重叠匹配，返回首个通过校验的匹配
    fn validated_match(&self, rule: &MatchRule, body: &str) -> Option<Detection> {
        // 无关键字的规则不会通过校验
        if !rule.has_keywords() {
            return None;
        }
        for m in rule.find_iter(body) {
            let window = ContextWindow::extract(body, m.start(), m.end(), self.radius);
            if ContextWindow::contains_any(window, &rule.keywords) {
                return Some(
                    Detection::new(&rule.label, EvidenceSource::Body, m.as_str()).with_context(window.trim()),
                );
            }
            debug!("[context]上下文校验未通过 | 技术: {} | 命中: {}", rule.label, m.as_str());
        }
        None
    }
}

impl DetectionStrategy for ContextStrategy {
    fn name(&self) -> &'static str {
        "context"
    }

    fn detect(&self, body: &str, headers: &ResponseHeaders, table: &RuleTable) -> Option<Detection> {
        let scope_headers = table.scope.includes_headers();
        for rule in table {
            if let Some(detection) = self.validated_match(rule, body) {
                debug!(
                    "[{}]匹配成功 | 分类: {} | 技术: {} | 上下文: {:?}",
                    self.name(),
                    table.category,
                    detection.name,
                    detection.context
                );
                return Some(detection);
            }
            if scope_headers {
                if let Some(value) = rule.first_matching_value(headers) {
                    debug!(
                        "[{}]Header匹配成功 | 分类: {} | 技术: {} | 内容: {}",
                        self.name(),
                        table.category,
                        rule.label,
                        value
                    );
                    return Some(Detection::new(&rule.label, EvidenceSource::Headers, value));
                }
            }
        }
        None
    }
}

/// Header优先策略：先用全部规则匹配Header，均未命中再匹配正文
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFirstStrategy;

impl DetectionStrategy for HeaderFirstStrategy {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn detect(&self, body: &str, headers: &ResponseHeaders, table: &RuleTable) -> Option<Detection> {
        if table.scope.includes_headers() {
            let header_hit = table.iter().find_map(|rule| {
                rule.first_matching_value(headers)
                    .map(|value| Detection::new(&rule.label, EvidenceSource::Headers, value))
            });
            if header_hit.is_some() {
                debug!("[{}]Header匹配成功 | 分类: {} | 结果: {:?}", self.name(), table.category, header_hit);
                return header_hit;
            }
        }

        table.iter().find_map(|rule| {
            rule.find(body)
                .map(|m| Detection::new(&rule.label, EvidenceSource::Body, m.as_str()))
        })
    }
}
