use thiserror::Error;

use crate::format::BlockKind;

pub type Result<T> = std::result::Result<T, NdFieldError>;

#[derive(Debug, Error)]
pub enum NdFieldError {
    #[error("corrupt {block} block: leading length {leading} != trailing length {trailing}")]
    CorruptBlock {
        block: BlockKind,
        leading: u32,
        trailing: u32,
    },

    #[error("truncated {block} block: need {needed} bytes, {available} available")]
    TruncatedInput {
        block: BlockKind,
        needed: usize,
        available: usize,
    },

    #[error("unrecognized format tag {0:?}")]
    UnrecognizedFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported datatype code {0}")]
    UnsupportedDatatype(i32),

    #[error("data block size mismatch: header declares {expected} bytes, block holds {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("{0} trailing bytes after data block")]
    TrailingBytes(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
