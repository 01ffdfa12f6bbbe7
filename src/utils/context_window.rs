//! 上下文窗口工具
//! 截取匹配位置前后固定字符数的片段，并校验关联关键字

/// 匹配前后各取的字符数
pub const CONTEXT_RADIUS: usize = 50;

/// 上下文窗口工具类
pub struct ContextWindow;

impl ContextWindow {
    /// 截取 [start - radius, end + radius] 范围的片段（按字符计，不会切断UTF-8）
    ///
    /// `start`/`end` 为匹配的字节偏移，需位于字符边界上（regex::Match 保证这一点）。
    pub fn extract(text: &str, start: usize, end: usize, radius: usize) -> &str {
        let begin = if radius == 0 {
            start
        } else {
            text[..start]
                .char_indices()
                .rev()
                .nth(radius - 1)
                .map(|(idx, _)| idx)
                .unwrap_or(0)
        };

        let finish = text[end..]
            .char_indices()
            .nth(radius)
            .map(|(idx, _)| end + idx)
            .unwrap_or(text.len());

        &text[begin..finish]
    }

    /// 窗口内是否包含任一关键字（区分大小写）；关键字为空时恒为false
    pub fn contains_any(window: &str, keywords: &[String]) -> bool {
        keywords.iter().any(|keyword| window.contains(keyword.as_str()))
    }
}
