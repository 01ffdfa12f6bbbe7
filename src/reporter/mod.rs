//! 输出模块：控制台消息与结果汇总
pub mod messages;
pub mod report;

pub use self::messages::{format_line, ConsoleLogger, Level, Logger, MemoryLogger, BANNER};
pub use self::report::ScanReporter;
