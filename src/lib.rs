//! web-stalker - 单页面网站技术栈识别工具

// 导出全局错误类型
pub use self::error::{FetchError, StalkerError, WsResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, ScanConfig, StrategyKind};

// 导出规则模块核心接口
pub use self::rule::{
    Category, Detection, EvidenceSource, MatchScope, ResponseHeaders, RuleDef, ScanResult,
};

// 导出编译模块核心接口
pub use self::compiler::{CompiledRuleLibrary, MatchRule, RuleCompiler, RuleTable};

// 导出工具模块核心接口
pub use self::utils::{ContextWindow, HeaderConverter};

// 导出检测模块核心接口
pub use self::detector::{
    BackendLanguageDetector, BasicStrategy, ContextStrategy, DetectionStrategy,
    HeaderFirstStrategy, TechDetector, TechnologyDetector, WebServerDetector,
};

// 导出拉取与输出模块
pub use self::fetcher::{FetchedPage, PageFetcher};
pub use self::reporter::{ConsoleLogger, Level, Logger, MemoryLogger, ScanReporter};
pub use self::scanner::WebsiteScanner;

// 声明所有子模块
pub mod cli;
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
pub mod fetcher;
pub mod reporter;
pub mod scanner;
