//! 规则与检测结果数据模型定义
//! 仅存储数据，无任何匹配逻辑

use std::fmt;
use serde::Serialize;

/// 原始规则定义（编译前）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDef {
    pub label: &'static str,
    pub pattern: &'static str,
    // 上下文校验关键字，为空时上下文策略永不命中
    pub keywords: &'static [&'static str],
}

impl RuleDef {
    pub const fn new(label: &'static str, pattern: &'static str) -> Self {
        Self { label, pattern, keywords: &[] }
    }

    pub const fn with_keywords(
        label: &'static str,
        pattern: &'static str,
        keywords: &'static [&'static str],
    ) -> Self {
        Self { label, pattern, keywords }
    }
}

/// 结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    WebServer,
    Frontend,
    BackendLanguage,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::WebServer, Category::Frontend, Category::BackendLanguage];

    /// 输出用名称（同时作为JSON键）
    pub fn label(&self) -> &'static str {
        match self {
            Category::WebServer => "Web Server",
            Category::Frontend => "Frontend",
            Category::BackendLanguage => "Backend Language",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 规则表参与匹配的数据范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    Body,
    BodyAndHeaders,
    // 仅匹配 Server 头的值
    ServerHeader,
}

impl MatchScope {
    pub fn includes_headers(&self) -> bool {
        matches!(self, MatchScope::BodyAndHeaders)
    }
}

/// 证据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvidenceSource {
    #[serde(rename = "HTML")]
    Body,
    Headers,
}

impl fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvidenceSource::Body => write!(f, "HTML"),
            EvidenceSource::Headers => write!(f, "Headers"),
        }
    }
}

/// 单条检测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub name: String,
    pub source: EvidenceSource,
    // 正文中命中的原文，或命中的Header值
    pub detected_by: String,
    // 上下文策略校验通过时的窗口片段
    pub context: Option<String>,
}

impl Detection {
    pub fn new(name: impl Into<String>, source: EvidenceSource, detected_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source,
            detected_by: detected_by.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Detected by: {})", self.name, self.detected_by)
    }
}

/// 单次扫描结果，每个分类最多一条
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    server_banner: String,
    web_server: Option<Detection>,
    frontend: Option<Detection>,
    backend_language: Option<Detection>,
}

impl ScanResult {
    pub fn new(
        server_banner: impl Into<String>,
        web_server: Option<Detection>,
        frontend: Option<Detection>,
        backend_language: Option<Detection>,
    ) -> Self {
        Self {
            server_banner: server_banner.into(),
            web_server,
            frontend,
            backend_language,
        }
    }

    /// 原始Server头（缺失时为"Unknown"）
    pub fn server_banner(&self) -> &str {
        &self.server_banner
    }

    pub fn get(&self, category: Category) -> Option<&Detection> {
        match category {
            Category::WebServer => self.web_server.as_ref(),
            Category::Frontend => self.frontend.as_ref(),
            Category::BackendLanguage => self.backend_language.as_ref(),
        }
    }

    pub fn web_server(&self) -> Option<&Detection> {
        self.web_server.as_ref()
    }

    pub fn frontend(&self) -> Option<&Detection> {
        self.frontend.as_ref()
    }

    pub fn backend_language(&self) -> Option<&Detection> {
        self.backend_language.as_ref()
    }

    /// 按固定顺序遍历已命中的分类
    pub fn entries(&self) -> impl Iterator<Item = (Category, &Detection)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|d| (category, d)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// 响应头（保留响应中的顺序，多值Header每个值一条）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// 按名称取首个值（HTTP头名不区分大小写）
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = ResponseHeaders::new();
        for (key, value) in iter {
            headers.insert(key, value);
        }
        headers
    }
}
