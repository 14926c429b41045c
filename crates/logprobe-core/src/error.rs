//! 错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 读取日志文件失败（致命，不重试）
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("log file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("cannot read log file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: &std::path::Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
            _ => LoadError::Unreadable { path: path.to_path_buf(), source: err },
        }
    }
}

/// 单个解码阶段失败；只在解码链内部流转，最终由 latin-1 吸收
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DecodeError {
    #[error("invalid utf-8 at byte {valid_up_to}")]
    Utf8 { valid_up_to: usize },
    #[error("utf-16 payload has odd length {len}")]
    Utf16OddLength { len: usize },
    #[error("unpaired utf-16 surrogate {unit:#06x}")]
    Utf16Surrogate { unit: u16 },
}
