//! 全局配置管理,存储所有可配置项

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

/// 默认浏览器标识
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 默认超时（秒）
pub const DEFAULT_HTTP_TIMEOUT: u64 = 10;

/// 检测策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// 首个匹配即命中
    #[default]
    #[value(name = "basic")]
    Basic,
    /// 匹配附近必须出现关联关键字
    #[value(name = "context")]
    Context,
    /// 严格标记特征表，后端优先采信Header
    #[value(name = "signature")]
    Signature,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Basic => write!(f, "basic"),
            StrategyKind::Context => write!(f, "context"),
            StrategyKind::Signature => write!(f, "signature"),
        }
    }
}

/// 扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    pub user_agent: String,
    // 是否输出额外进度信息
    pub verbose: bool,
    // 是否在日志后输出JSON
    pub output_json: bool,
    pub strategy: StrategyKind,
    pub show_banner: bool,
}

impl ScanConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: false,
            output_json: false,
            strategy: StrategyKind::Basic,
            show_banner: true,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ScanConfig {
        ScanConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ScanConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn output_json(mut self, output_json: bool) -> Self {
        self.config.output_json = output_json;
        self
    }

    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn show_banner(mut self, show_banner: bool) -> Self {
        self.config.show_banner = show_banner;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.config
    }
}
