//! 规则模块：内置规则表与数据模型定义
pub mod model;
pub mod table;

// 导出核心接口
pub use self::model::{
    Category, Detection, EvidenceSource, MatchScope, ResponseHeaders, RuleDef, ScanResult,
};
pub use self::table::{
    BACKEND_RULES, FRONTEND_RULES, SIGNATURE_BACKEND_RULES, SIGNATURE_FRONTEND_RULES,
    WEB_SERVER_RULES,
};
