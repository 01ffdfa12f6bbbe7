//! 通用工具模块
pub mod context_window;
pub mod header_converter;

pub use self::context_window::{ContextWindow, CONTEXT_RADIUS};
pub use self::header_converter::HeaderConverter;
