//! 编译后模式模型
//! 正则编译后的结构

use regex::{Match, Matches, Regex};

use crate::config::StrategyKind;
use crate::rule::{Category, MatchScope, ResponseHeaders};

/// 编译后的单条规则
#[derive(Debug, Clone)]
pub struct MatchRule {
    pub label: String,
    pub regex: Regex,
    pub keywords: Vec<String>,
}

impl MatchRule {
    /// 首个匹配
    pub fn find<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.regex.find(haystack)
    }

    /// 所有不重叠匹配
    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h str) -> Matches<'r, 'h> {
        self.regex.find_iter(haystack)
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// 首个命中的Header值
    pub fn first_matching_value<'h>(&self, headers: &'h ResponseHeaders) -> Option<&'h str> {
        headers.values().find(|value| self.regex.is_match(value))
    }

    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}

/// 编译后的规则表（有序）
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub category: Category,
    pub scope: MatchScope,
    pub rules: Vec<MatchRule>,
}

impl RuleTable {
    pub fn iter(&self) -> std::slice::Iter<'_, MatchRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&MatchRule> {
        self.rules.iter().find(|rule| rule.label == label)
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a MatchRule;
    type IntoIter = std::slice::Iter<'a, MatchRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// 编译后的规则库
#[derive(Debug, Clone)]
pub struct CompiledRuleLibrary {
    pub web_server: RuleTable,
    pub frontend: RuleTable,
    pub backend: RuleTable,
    pub signature_frontend: RuleTable,
    pub signature_backend: RuleTable,
}

impl CompiledRuleLibrary {
    /// 按策略选择前端规则表
    pub fn frontend_table(&self, kind: StrategyKind) -> &RuleTable {
        match kind {
            StrategyKind::Signature => &self.signature_frontend,
            StrategyKind::Basic | StrategyKind::Context => &self.frontend,
        }
    }

    /// 按策略选择后端规则表
    pub fn backend_table(&self, kind: StrategyKind) -> &RuleTable {
        match kind {
            StrategyKind::Signature => &self.signature_backend,
            StrategyKind::Basic | StrategyKind::Context => &self.backend,
        }
    }
}
