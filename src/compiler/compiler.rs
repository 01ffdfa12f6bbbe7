//! 规则编译器核心
//! 仅负责将内置规则定义编译为可执行的正则模式

use std::time::Instant;
use regex::RegexBuilder;
use tracing::debug;

use super::pattern::{CompiledRuleLibrary, MatchRule, RuleTable};
use crate::error::{StalkerError, WsResult};
use crate::rule::{
    Category, MatchScope, RuleDef, BACKEND_RULES, FRONTEND_RULES, SIGNATURE_BACKEND_RULES,
    SIGNATURE_FRONTEND_RULES, WEB_SERVER_RULES,
};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译全部内置规则表
    pub fn compile_builtin() -> WsResult<CompiledRuleLibrary> {
        let start = Instant::now();

        let library = CompiledRuleLibrary {
            web_server: Self::compile_table(Category::WebServer, MatchScope::ServerHeader, WEB_SERVER_RULES)?,
            frontend: Self::compile_table(Category::Frontend, MatchScope::Body, FRONTEND_RULES)?,
            backend: Self::compile_table(
                Category::BackendLanguage,
                MatchScope::BodyAndHeaders,
                BACKEND_RULES,
            )?,
            signature_frontend: Self::compile_table(
                Category::Frontend,
                MatchScope::Body,
                SIGNATURE_FRONTEND_RULES,
            )?,
            signature_backend: Self::compile_table(
                Category::BackendLanguage,
                MatchScope::BodyAndHeaders,
                SIGNATURE_BACKEND_RULES,
            )?,
        };

        debug!(
            "规则编译完成，耗时{:?}：Server规则{}条、前端规则{}条、后端规则{}条、特征规则{}条",
            start.elapsed(),
            library.web_server.len(),
            library.frontend.len(),
            library.backend.len(),
            library.signature_frontend.len() + library.signature_backend.len()
        );

        Ok(library)
    }

    /// 编译一张规则表，保持定义顺序
    pub fn compile_table(category: Category, scope: MatchScope, defs: &[RuleDef]) -> WsResult<RuleTable> {
        let mut rules = Vec::with_capacity(defs.len());
        for def in defs {
            if rules.iter().any(|r: &MatchRule| r.label == def.label) {
                return Err(StalkerError::RuleTableError(format!(
                    "duplicate label {} in {} table",
                    def.label, category
                )));
            }
            rules.push(Self::compile_rule(def)?);
        }

        Ok(RuleTable { category, scope, rules })
    }

    /// 编译单条规则（忽略大小写）
    pub fn compile_rule(def: &RuleDef) -> WsResult<MatchRule> {
        let regex = RegexBuilder::new(def.pattern)
            .case_insensitive(true)
            .build()?;

        Ok(MatchRule {
            label: def.label.to_string(),
            regex,
            keywords: def.keywords.iter().map(|k| k.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_builtin_keeps_order() {
        let library = RuleCompiler::compile_builtin().unwrap();
        let labels: Vec<_> = library.backend.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["PHP", "Python", "Ruby", "Node.js"]);
        assert_eq!(library.frontend.len(), 10);
        assert_eq!(library.web_server.len(), 3);
        assert_eq!(library.backend.scope, MatchScope::BodyAndHeaders);
        assert_eq!(library.frontend.scope, MatchScope::Body);
        assert_eq!(library.web_server.scope, MatchScope::ServerHeader);
        assert!(!library.web_server.scope.includes_headers());
    }

    #[test]
    fn test_compiled_rule_is_case_insensitive() {
        let rule = RuleCompiler::compile_rule(&RuleDef::new("LiteSpeed", "LiteSpeed")).unwrap();
        assert!(rule.is_match("litespeed"));
        assert!(rule.is_match("LITESPEED"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = RuleCompiler::compile_rule(&RuleDef::new("Broken", "(unclosed")).unwrap_err();
        assert!(matches!(err, StalkerError::RegexCompileError(_)));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let defs = [RuleDef::new("PHP", "php"), RuleDef::new("PHP", r"\.php")];
        let err = RuleCompiler::compile_table(Category::BackendLanguage, MatchScope::BodyAndHeaders, &defs)
            .unwrap_err();
        assert!(matches!(err, StalkerError::RuleTableError(_)));
    }
}
