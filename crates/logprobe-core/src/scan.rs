//! 扫描主流程：加载 → 关键字统计与片段 → 重点关键字扩展上下文
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::decode::load_document;
use crate::keywords::KEYWORDS;
use crate::matcher::{count_non_overlapping, KeywordMatcher};
use crate::options::{ScanOptions, ScanStats};
use crate::report;
use crate::types::{Document, KeywordReport, Snippet};
use crate::window::{char_offset, context_window, flatten_newlines};

/// 读取 `path` 并把完整报告写入 `out`
/// - 文件不存在/不可读：直接返回错误（致命，不重试）
/// - 编码失败：在解码链内部吸收，不会传到这里
pub fn scan_and_write(path: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats> {
    report::write_reading(out, path)?;
    let doc = load_document(path)?;
    report::write_loaded(out, doc.char_len())?;
    write_document_report(&doc, out, opts)
}

/// 对已加载的文档按固定关键字表输出报告（不含加载状态行）
pub fn write_document_report(doc: &Document, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats> {
    let reports = scan_keywords(doc, &KEYWORDS, opts)?;
    let mut stats = ScanStats::default();

    for r in &reports {
        stats.keywords_searched += 1;
        if r.count > 0 { stats.keywords_found += 1; }
        stats.total_occurrences += r.count;
        stats.snippets_written += r.snippets.len();
        report::write_keyword(out, r).context("write keyword report")?;
    }

    if let Some(window) = extended_context(doc, opts.focus_keyword, opts.extended_radius) {
        stats.focus_found = true;
        report::write_extended(out, opts.focus_keyword, window).context("write extended context")?;
    }

    Ok(stats)
}

/// 按给定顺序扫描关键字
/// 片段定位：从上一个命中起点 +1 字符处继续查找，最多 `min(max_snippets, count)` 个
pub fn scan_keywords(doc: &Document, keywords: &[&str], opts: &ScanOptions) -> Result<Vec<KeywordReport>> {
    let text = doc.text();
    let matcher = KeywordMatcher::new(keywords)?;
    let hits = matcher.hit_offsets(text);

    let mut reports = Vec::with_capacity(keywords.len());
    for (idx, kw) in keywords.iter().enumerate() {
        let starts = &hits[idx];
        let count = count_non_overlapping(starts, matcher.keyword_len(idx));
        debug!(keyword = *kw, count, overlapping = starts.len(), "keyword scanned");

        let snippets = starts
            .iter()
            .take(opts.max_snippets.min(count))
            .enumerate()
            .map(|(i, &pos)| Snippet {
                ordinal: i + 1,
                char_offset: char_offset(text, pos),
                text: flatten_newlines(context_window(text, pos, opts.snippet_radius, opts.snippet_radius)),
            })
            .collect();

        reports.push(KeywordReport { keyword: kw.to_string(), count, snippets });
    }
    Ok(reports)
}

/// 首个命中的扩展上下文（保留换行）；未命中返回 None
pub fn extended_context<'a>(doc: &'a Document, keyword: &str, radius: usize) -> Option<&'a str> {
    let text = doc.text();
    let pos = text.find(keyword)?;
    Some(context_window(text, pos, radius, radius))
}
