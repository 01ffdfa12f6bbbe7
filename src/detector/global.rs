//! 内置规则库单例管理
use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::compiler::{CompiledRuleLibrary, RuleCompiler};
use crate::error::WsResult;

/// 全局编译后规则库（进程内只编译一次）
static BUILTIN_LIBRARY: OnceCell<Arc<CompiledRuleLibrary>> = OnceCell::new();

/// 获取内置规则库，首次调用时编译
pub fn builtin_library() -> WsResult<Arc<CompiledRuleLibrary>> {
    BUILTIN_LIBRARY
        .get_or_try_init(|| RuleCompiler::compile_builtin().map(Arc::new))
        .cloned()
}
