//! Header格式转换工具
//! reqwest HeaderMap 转为检测使用的有序Header表

use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::rule::ResponseHeaders;

/// 单个响应允许转换的最大Header条数
const MAX_HEADER_ENTRIES: usize = 1000;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 将HeaderMap转换为ResponseHeaders（多值Header逐条保留）
    pub fn to_response_headers(header_map: &HeaderMap) -> ResponseHeaders {
        let mut headers = ResponseHeaders::new();

        for (iter_count, (key, value)) in header_map.iter().enumerate() {
            if iter_count >= MAX_HEADER_ENTRIES {
                warn!("Header超过{}条，剩余部分忽略", MAX_HEADER_ENTRIES);
                break;
            }

            // 非可见ASCII的值按有损UTF-8处理，不丢弃
            let value_str = match value.to_str() {
                Ok(v) => v.to_string(),
                Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
            };
            headers.insert(key.as_str(), value_str);
        }

        debug!("Header转换完成，生成{}条记录", headers.len());
        headers
    }
}
