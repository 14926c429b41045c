//! 上下文窗口（按字符计数，两端截断到文档边界）

/// 以字节偏移 `pos` 为中心，向前取 `before` 个字符、向后取 `after` 个字符
/// `pos` 必须落在字符边界上（命中起点天然满足）
pub(crate) fn context_window(text: &str, pos: usize, before: usize, after: usize) -> &str {
    let start = text[..pos]
        .char_indices()
        .rev()
        .take(before)
        .last()
        .map_or(pos, |(i, _)| i);
    let end = text[pos..]
        .char_indices()
        .nth(after)
        .map_or(text.len(), |(i, _)| pos + i);
    &text[start..end]
}

/// 把 LF/CR 替换为空格，保证片段单行输出
pub(crate) fn flatten_newlines(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

/// 字节偏移 → 字符偏移
pub(crate) fn char_offset(text: &str, pos: usize) -> usize {
    text[..pos].chars().count()
}
