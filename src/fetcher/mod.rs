//! 拉取模块：单页面HTTP拉取
pub mod fetcher;

pub use self::fetcher::{validate_url, FetchedPage, PageFetcher};
