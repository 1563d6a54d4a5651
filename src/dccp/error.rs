//! 解码错误

use thiserror::Error;

use crate::wire::Shortfall;

/// Decode stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Header,
    Sequence,
    Extension,
    /// Data Offset cross-check (strict mode only).
    Offset,
}

/// DCCP 头部解码错误
///
/// 截断类错误都带有出错时的游标位置、所需字节数与剩余字节数。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated generic header: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedHeader {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("truncated sequence number: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedSequence {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("truncated extension header: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedExtension {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("data offset declares {declared} header bytes, but {consumed} were decoded")]
    DataOffsetTooSmall { declared: usize, consumed: usize },
}

impl DecodeError {
    pub fn stage(&self) -> Stage {
        match self {
            DecodeError::TruncatedHeader { .. } => Stage::Header,
            DecodeError::TruncatedSequence { .. } => Stage::Sequence,
            DecodeError::TruncatedExtension { .. } => Stage::Extension,
            DecodeError::DataOffsetTooSmall { .. } => Stage::Offset,
        }
    }

    pub(crate) fn header(s: Shortfall) -> Self {
        DecodeError::TruncatedHeader {
            offset: s.offset,
            needed: s.needed,
            available: s.available,
        }
    }

    pub(crate) fn sequence(s: Shortfall) -> Self {
        DecodeError::TruncatedSequence {
            offset: s.offset,
            needed: s.needed,
            available: s.available,
        }
    }

    pub(crate) fn extension(s: Shortfall) -> Self {
        DecodeError::TruncatedExtension {
            offset: s.offset,
            needed: s.needed,
            available: s.available,
        }
    }
}
