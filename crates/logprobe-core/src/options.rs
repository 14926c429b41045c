//! 扫描选项与统计信息（模块）
use crate::keywords::FOCUS_KEYWORD;

/// 每个关键字最多输出的片段数
pub const DEFAULT_MAX_SNIPPETS: usize = 5;
/// 片段窗口半径（字符数，命中起点前后各取这么多）
pub const DEFAULT_SNIPPET_RADIUS: usize = 100;
/// 重点关键字的扩展窗口半径（字符数）
pub const DEFAULT_EXTENDED_RADIUS: usize = 500;

/// 扫描选项
/// - 数值均为固定常量，`Default` 即线上行为；不通过命令行暴露
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 每个关键字最多输出的片段数
    pub max_snippets: usize,
    /// 片段窗口半径（字符）
    pub snippet_radius: usize,
    /// 扩展窗口半径（字符）
    pub extended_radius: usize,
    /// 需要额外输出扩展上下文的关键字
    pub focus_keyword: &'static str,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_snippets: DEFAULT_MAX_SNIPPETS,
            snippet_radius: DEFAULT_SNIPPET_RADIUS,
            extended_radius: DEFAULT_EXTENDED_RADIUS,
            focus_keyword: FOCUS_KEYWORD,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub keywords_searched: usize,
    pub keywords_found: usize,
    pub total_occurrences: usize,
    pub snippets_written: usize,
    pub focus_found: bool,
}
