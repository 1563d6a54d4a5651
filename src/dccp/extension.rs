//! Type-dependent extension header following the generic header.

use serde::{Deserialize, Serialize};

use crate::wire::Cursor;

use super::error::DecodeError;
use super::packet_type::PacketType;
use super::sequence::SequenceNumber;

/// Extension header, selected by the packet type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtensionHeader {
    /// Request and Response: a single code byte.
    RequestResponse { code: u8 },
    /// Acknowledgement subheader; the form follows the X bit.
    Ack { ack_number: SequenceNumber },
    /// Types not decoded further (Data and the rest); owns the whole remainder.
    Unparsed { raw: Vec<u8> },
}

/// Ack subheader, X=1: 16 reserved bits + 48-bit ack number.
pub const EXTENDED_ACK_LEN: usize = 8;
/// Ack subheader, X=0: 8 reserved bits + 24-bit ack number.
pub const SHORT_ACK_LEN: usize = 4;

/// Decodes the extension header at `cursor` (the end of the generic header).
pub fn decode_extension(
    buf: &[u8],
    cursor: usize,
    packet_type: PacketType,
    extended: bool,
) -> Result<(ExtensionHeader, usize), DecodeError> {
    let mut cur = Cursor::at(buf, cursor);
    let ext = match packet_type {
        PacketType::Request | PacketType::Response => ExtensionHeader::RequestResponse {
            code: decode_code(&mut cur, extended)?,
        },
        PacketType::Ack => ExtensionHeader::Ack {
            ack_number: decode_ack_number(&mut cur, extended)?,
        },
        PacketType::Data
        | PacketType::DataAck
        | PacketType::CloseReq
        | PacketType::Close
        | PacketType::Reset
        | PacketType::Sync
        | PacketType::SyncAck
        | PacketType::Reserved(_) => ExtensionHeader::Unparsed {
            raw: cur.rest().to_vec(),
        },
    };
    Ok((ext, cur.pos()))
}

/// X=1 reads the code at the end of the generic header; X=0 skips one
/// reserved byte first.
fn decode_code(cur: &mut Cursor<'_>, extended: bool) -> Result<u8, DecodeError> {
    if !extended {
        cur.require(2).map_err(DecodeError::extension)?;
        cur.skip(1).map_err(DecodeError::extension)?;
    }
    cur.read_u8().map_err(DecodeError::extension)
}

fn decode_ack_number(cur: &mut Cursor<'_>, extended: bool) -> Result<SequenceNumber, DecodeError> {
    if extended {
        cur.require(EXTENDED_ACK_LEN).map_err(DecodeError::extension)?;
        cur.skip(2).map_err(DecodeError::extension)?;
        Ok(SequenceNumber::Extended(
            cur.read_be_u48().map_err(DecodeError::extension)?,
        ))
    } else {
        cur.require(SHORT_ACK_LEN).map_err(DecodeError::extension)?;
        cur.skip(1).map_err(DecodeError::extension)?;
        Ok(SequenceNumber::Short(
            cur.read_be_u24().map_err(DecodeError::extension)?,
        ))
    }
}
