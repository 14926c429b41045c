//! 编码探测与回退链（utf-8 → utf-16 → latin-1）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DecodeError, LoadError};
use crate::types::{Document, SourceEncoding};

/// 整读文件并解码；文件句柄在读取结束后即释放
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| LoadError::from_io(path, e))?;
    drop(reader);

    let doc = Document::from_bytes(&buf);
    info!(
        path = %path.display(),
        encoding = %doc.encoding(),
        bytes = doc.byte_len(),
        chars = doc.char_len(),
        "log decoded"
    );
    Ok(doc)
}

/// 依次尝试各编码，返回第一个成功的结果（换行已统一为 `\n`）
/// latin-1 不会失败，所以这里总能得到文本
pub(crate) fn decode_with_fallback(bytes: &[u8]) -> (String, SourceEncoding) {
    let (text, encoding) = decode_stages(bytes);
    (normalize_newlines(text), encoding)
}

/// 文本模式读取语义：`\r\n` 与单独的 `\r` 都变成 `\n`
pub(crate) fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn decode_stages(bytes: &[u8]) -> (String, SourceEncoding) {
    match decode_utf8(bytes) {
        Ok(text) => return (text, SourceEncoding::Utf8),
        Err(e) => debug!(error = %e, "utf-8 rejected"),
    }
    match decode_utf16(bytes) {
        Ok(res) => return res,
        Err(e) => debug!(error = %e, "utf-16 rejected"),
    }
    (decode_latin1(bytes), SourceEncoding::Latin1)
}

/// 严格 UTF-8；开头的 BOM 保留为 U+FEFF
fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| DecodeError::Utf8 { valid_up_to: e.valid_up_to() })
}

/// UTF-16：BOM 决定字节序并被剥离；无 BOM 时按小端处理
fn decode_utf16(bytes: &[u8]) -> Result<(String, SourceEncoding), DecodeError> {
    let (body, encoding) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, SourceEncoding::Utf16Le),
        [0xFE, 0xFF, rest @ ..] => (rest, SourceEncoding::Utf16Be),
        _ => (bytes, SourceEncoding::Utf16Le),
    };
    if body.len() % 2 != 0 {
        return Err(DecodeError::Utf16OddLength { len: body.len() });
    }

    let big_endian = encoding == SourceEncoding::Utf16Be;
    let units = body.chunks_exact(2).map(|p| {
        if big_endian { u16::from_be_bytes([p[0], p[1]]) } else { u16::from_le_bytes([p[0], p[1]]) }
    });

    let mut text = String::with_capacity(body.len() / 2);
    for r in char::decode_utf16(units) {
        match r {
            Ok(ch) => text.push(ch),
            Err(e) => return Err(DecodeError::Utf16Surrogate { unit: e.unpaired_surrogate() }),
        }
    }
    Ok((text, encoding))
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
