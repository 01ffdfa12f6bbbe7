//! 检测模块：技术检测核心逻辑
pub mod global;
pub mod strategy;
pub mod analyzer;
pub mod detector;

// 导出核心接口
pub use self::global::builtin_library;
pub use self::strategy::{strategy_for, BasicStrategy, ContextStrategy, DetectionStrategy, HeaderFirstStrategy};
pub use self::analyzer::{BackendLanguageDetector, TechnologyDetector, WebServerDetector, UNKNOWN_SERVER};
pub use self::detector::TechDetector;
