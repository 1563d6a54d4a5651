//! Sequence number field.

use serde::{Deserialize, Serialize};

use crate::wire::Cursor;

use super::error::DecodeError;

/// Wire length of the extended form: reserved byte + 48-bit number.
pub const EXTENDED_SEQ_LEN: usize = 7;
/// Wire length of the short form: 24-bit number.
pub const SHORT_SEQ_LEN: usize = 3;

/// A DCCP sequence (or acknowledgement) number in the form it was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "value", rename_all = "snake_case")]
pub enum SequenceNumber {
    /// 48 bits, X=1.
    Extended(u64),
    /// Low 24 bits only, X=0.
    Short(u32),
}

impl SequenceNumber {
    pub fn value(self) -> u64 {
        match self {
            SequenceNumber::Extended(v) => v,
            SequenceNumber::Short(v) => v as u64,
        }
    }

    pub fn is_extended(self) -> bool {
        matches!(self, SequenceNumber::Extended(_))
    }
}

/// Decodes the sequence number starting at `cursor`.
///
/// The extended form skips one reserved byte before the 48-bit value.
pub fn decode_sequence(
    buf: &[u8],
    cursor: usize,
    extended: bool,
) -> Result<(SequenceNumber, usize), DecodeError> {
    let mut cur = Cursor::at(buf, cursor);
    let seq = if extended {
        cur.require(EXTENDED_SEQ_LEN).map_err(DecodeError::sequence)?;
        cur.skip(1).map_err(DecodeError::sequence)?;
        SequenceNumber::Extended(cur.read_be_u48().map_err(DecodeError::sequence)?)
    } else {
        SequenceNumber::Short(cur.read_be_u24().map_err(DecodeError::sequence)?)
    };
    Ok((seq, cur.pos()))
}
