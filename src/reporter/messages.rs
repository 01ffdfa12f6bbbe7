//! 控制台消息输出
//! 带级别标签与时间戳的彩色日志行，检测核心只通过 Logger 接口输出

use std::fmt;
use std::sync::Mutex;

use chrono::Local;
use colored::Colorize;

/// 启动横幅
pub const BANNER: &str = r#"                __               __        ____
 _      _____  / /_        _____/ /_____ _/ / /_____  _____
| | /| / / _ \/ __ \______/ ___/ __/ __ `/ / //_/ _ \/ ___/
| |/ |/ /  __/ /_/ /_____(__  ) /_/ /_/ / / ,< /  __/ /
|__/|__/\___/_.___/     /____/\__/\__,_/_/_/|_|\___/_/  made by corede
"#;

/// 时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Success,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Success => "SUCCESS",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 输出接口
pub trait Logger {
    /// 输出一条带级别的消息
    fn log(&self, level: Level, message: &str);

    /// 原样输出一段文本（JSON结果等）
    fn emit(&self, text: &str);

    fn banner(&self, art: &str) {
        self.emit(art);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn success(&self, message: &str) {
        self.log(Level::Success, message);
    }
}

/// 组装一行日志：`[LEVEL] YYYY-MM-DD HH:MM:SS - message`
pub fn format_line(tag: impl fmt::Display, timestamp: impl fmt::Display, message: &str) -> String {
    format!("[{}] {} - {}", tag, timestamp, message)
}

/// 标准输出彩色日志
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    fn colored_tag(level: Level) -> colored::ColoredString {
        let tag = level.tag();
        match level {
            Level::Info => tag.green().bold(),
            Level::Warn => tag.bright_yellow().bold(),
            Level::Error => tag.red().bold(),
            Level::Success => tag.bright_cyan().bold(),
        }
    }

    /// 渲染一行控制台输出（级别标签着色）
    pub fn render(level: Level, timestamp: impl fmt::Display, message: &str) -> String {
        format_line(Self::colored_tag(level), timestamp, message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &str) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        println!("{}", Self::render(level, timestamp, message));
    }

    fn emit(&self, text: &str) {
        println!("{}", text);
    }

    fn banner(&self, art: &str) {
        println!("{}", art.blue().bold());
    }
}

/// 内存日志（测试及嵌入调用时收集输出）
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Level, String)>>,
    emitted: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// 是否存在指定级别且包含给定文本的消息
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }

    fn emit(&self, text: &str) {
        if let Ok(mut emitted) = self.emitted.lock() {
            emitted.push(text.to_string());
        }
    }
}
