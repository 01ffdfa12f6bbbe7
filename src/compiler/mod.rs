//! 编译模块：将内置规则编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledRuleLibrary, MatchRule, RuleTable};
pub use self::compiler::RuleCompiler;
