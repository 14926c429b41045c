//! 公共类型（对外暴露）
use std::fmt;

/// 解码链中最终成功的编码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1：任意字节都可映射，解码链的兜底
    Latin1,
}

impl SourceEncoding {
    pub fn label(self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Utf16Le => "utf-16le",
            SourceEncoding::Utf16Be => "utf-16be",
            SourceEncoding::Latin1 => "latin-1",
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 解码后的日志全文（创建后不可变）
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    encoding: SourceEncoding,
    byte_len: usize,
    char_len: usize,
}

impl Document {
    pub(crate) fn new(text: String, encoding: SourceEncoding, byte_len: usize) -> Self {
        let char_len = text.chars().count();
        Self { text, encoding, byte_len, char_len }
    }

    /// 直接用字节构建（走完整解码链），测试与内存数据使用
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let (text, encoding) = crate::decode::decode_with_fallback(bytes);
        Self::new(text, encoding, bytes.len())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// 原始文件字节数
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// 解码后的字符数（Unicode 标量值）
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

/// 内存文本原样作为 utf-8 文档（不做换行归一化）
impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::new(s.to_string(), SourceEncoding::Utf8, s.len())
    }
}

/// 单个关键字的扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReport {
    pub keyword: String,
    /// 非重叠计数（与 `str::matches` 一致）
    pub count: usize,
    pub snippets: Vec<Snippet>,
}

/// 命中附近的上下文片段（已把换行替换为空格）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// 从 1 开始的序号
    pub ordinal: usize,
    /// 命中起点（字符偏移）
    pub char_offset: usize,
    pub text: String,
}
