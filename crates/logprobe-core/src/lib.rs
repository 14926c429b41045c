//! 构建日志诊断库
//!
//! 设计要点：
//! - 整读文件后按 utf-8 → utf-16 → latin-1 的顺序解码，第一个成功者生效；latin-1 兜底不会失败。
//! - 固定关键字表用一个 Aho-Corasick 自动机一次遍历定位，计数口径为非重叠命中。
//! - 片段窗口按字符计数并截断到文档边界；报告以纯文本写入任意 `Write`。

mod decode;
mod error;
mod keywords;
mod matcher;
mod options;
mod report;
mod scan;
mod types;
mod window;

pub use decode::load_document;
pub use error::LoadError;
pub use keywords::{FOCUS_KEYWORD, KEYWORDS};
pub use options::{ScanOptions, ScanStats};
pub use scan::{extended_context, scan_and_write, scan_keywords, write_document_report};
pub use types::{Document, KeywordReport, SourceEncoding, Snippet};
