//! 通用头部（定长部分）解码
//!
//! 布局（字节偏移）：
//! - 0: Source Port (16)
//! - 2: Dest Port (16)
//! - 4: Data Offset (8)
//! - 5: CCVal (4) | CsCov (4)
//! - 6: Checksum (16)
//! - 8: Res (3) | Type (4) | X (1)

use serde::{Deserialize, Serialize};

use crate::wire::{Cursor, bit_flag, bits};

use super::error::DecodeError;
use super::packet_type::PacketType;

/// 定长部分占用的字节数（到序列号字段之前）
pub const FIXED_LEN: usize = 9;

/// 最短的完整通用头部（X=0 时：定长部分 + 24 位序列号）
pub const MIN_GENERIC_LEN: usize = 12;

/// 通用头部的定长字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericHeader {
    pub source_port: u16,
    pub dest_port: u16,
    /// 头部长度，单位为 4 字节
    pub data_offset: u8,
    pub ccval: u8,
    pub cscov: u8,
    pub checksum: u16,
    pub reserved: u8,
    pub packet_type: PacketType,
    /// Extended Sequence Numbers (X)
    pub extended_seq_flag: bool,
}

/// 解码定长字段，返回头部和序列号字段的起始位置。
///
/// 缓冲区至少要有 [`MIN_GENERIC_LEN`] 字节，否则返回 `TruncatedHeader`。
pub fn decode_generic(buf: &[u8]) -> Result<(GenericHeader, usize), DecodeError> {
    let mut cur = Cursor::new(buf);
    cur.require(MIN_GENERIC_LEN).map_err(DecodeError::header)?;

    let source_port = cur.read_be_u16().map_err(DecodeError::header)?;
    let dest_port = cur.read_be_u16().map_err(DecodeError::header)?;
    let data_offset = cur.read_u8().map_err(DecodeError::header)?;
    let ccval_cscov = cur.read_u8().map_err(DecodeError::header)?;
    let checksum = cur.read_be_u16().map_err(DecodeError::header)?;
    let res_type_x = cur.read_u8().map_err(DecodeError::header)?;

    let header = GenericHeader {
        source_port,
        dest_port,
        data_offset,
        ccval: bits(ccval_cscov, 4, 4),
        cscov: bits(ccval_cscov, 0, 4),
        checksum,
        reserved: bits(res_type_x, 5, 3),
        packet_type: PacketType::from_code(bits(res_type_x, 1, 4)),
        extended_seq_flag: bit_flag(res_type_x, 0),
    };
    debug_assert_eq!(cur.pos(), FIXED_LEN);
    Ok((header, cur.pos()))
}
