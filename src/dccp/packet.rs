//! 完整的 DCCP 头部记录
//!
//! 单次解码：通用头部 -> 序列号 -> 扩展头部，三个阶段共用一个游标，
//! 任何阶段失败都直接返回错误，不产生部分结果。

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::config::DecodeOptions;
use super::error::DecodeError;
use super::extension::{ExtensionHeader, decode_extension};
use super::generic::{GenericHeader, decode_generic};
use super::packet_type::PacketType;
use super::sequence::{SequenceNumber, decode_sequence};

/// 解码后的 DCCP 包
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DccpPacket {
    pub header: GenericHeader,
    pub sequence: SequenceNumber,
    pub extension: ExtensionHeader,
    /// 按头部解码的字节数：通用头部 + 已解码的扩展头部。
    /// `Unparsed` 类型只算到通用头部末尾，剩余字节归 `Unparsed::raw`。
    pub header_len: usize,
    /// 扩展头部之后的字节（选项 + 数据），不再细分
    pub trailing: Vec<u8>,
}

impl DccpPacket {
    /// 使用默认选项解码
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with(buf, &DecodeOptions::default())
    }

    #[tracing::instrument(skip(buf, opts), fields(len = buf.len(), strict = opts.strict_offset))]
    pub fn decode_with(buf: &[u8], opts: &DecodeOptions) -> Result<Self, DecodeError> {
        let (header, cursor) = decode_generic(buf)?;
        trace!(
            sport = header.source_port,
            dport = header.dest_port,
            ty = ?header.packet_type,
            x = header.extended_seq_flag,
            cursor,
            "通用头部解码完成"
        );

        let (sequence, cursor) = decode_sequence(buf, cursor, header.extended_seq_flag)?;
        trace!(seq = sequence.value(), cursor, "序列号解码完成");

        let (extension, end) =
            decode_extension(buf, cursor, header.packet_type, header.extended_seq_flag)?;
        trace!(ext = ?extension, end, "扩展头部解码完成");

        let header_len = match extension {
            ExtensionHeader::Unparsed { .. } => cursor,
            _ => end,
        };
        let pkt = DccpPacket {
            header,
            sequence,
            extension,
            header_len,
            trailing: buf[end..].to_vec(),
        };

        let declared = pkt.declared_header_len();
        if declared < pkt.header_len {
            if opts.strict_offset {
                return Err(DecodeError::DataOffsetTooSmall {
                    declared,
                    consumed: pkt.header_len,
                });
            }
            warn!(declared, consumed = pkt.header_len, "⚠️  Data Offset 小于已解码的头部长度");
        }

        debug!(header_len = pkt.header_len, trailing = pkt.trailing.len(), "📦 DCCP 包解码完成");
        Ok(pkt)
    }

    /// Data Offset 声明的头部长度（字节）
    pub fn declared_header_len(&self) -> usize {
        self.header.data_offset as usize * 4
    }

    pub fn source_port(&self) -> u16 {
        self.header.source_port
    }

    pub fn dest_port(&self) -> u16 {
        self.header.dest_port
    }

    pub fn ccval(&self) -> u8 {
        self.header.ccval
    }

    pub fn cscov(&self) -> u8 {
        self.header.cscov
    }

    pub fn checksum(&self) -> u16 {
        self.header.checksum
    }

    pub fn packet_type(&self) -> PacketType {
        self.header.packet_type
    }

    pub fn extended_seq_flag(&self) -> bool {
        self.header.extended_seq_flag
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence.value()
    }

    /// Request/Response 的 code
    pub fn code(&self) -> Option<u8> {
        match self.extension {
            ExtensionHeader::RequestResponse { code } => Some(code),
            _ => None,
        }
    }

    pub fn ack_number(&self) -> Option<u64> {
        match self.extension {
            ExtensionHeader::Ack { ack_number } => Some(ack_number.value()),
            _ => None,
        }
    }

    /// 未解析类型的原始字节
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match &self.extension {
            ExtensionHeader::Unparsed { raw } => Some(raw),
            _ => None,
        }
    }
}
