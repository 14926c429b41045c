//! 控制台报告格式（纯文本，逐行写入）
use std::io::{self, Write};
use std::path::Path;

use crate::types::KeywordReport;

pub(crate) fn write_reading(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(out, "Reading {}...", path.display())
}

pub(crate) fn write_loaded(out: &mut dyn Write, char_len: usize) -> io::Result<()> {
    writeln!(out, "File read successfully. Length: {char_len} chars")
}

pub(crate) fn write_keyword(out: &mut dyn Write, report: &KeywordReport) -> io::Result<()> {
    writeln!(out, "--- Searching for '{}' ---", report.keyword)?;
    writeln!(out, "Found {} occurrences.", report.count)?;
    for s in &report.snippets {
        writeln!(out, "Match {}: ...{}...", s.ordinal, s.text)?;
    }
    Ok(())
}

pub(crate) fn write_extended(out: &mut dyn Write, keyword: &str, window: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{keyword} Context:")?;
    writeln!(out, "{window}")
}
