//! DCCP packet types (RFC 4340 §5.1).

use serde::{Deserialize, Deserializer, Serialize};

/// 4-bit Type field of the generic header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketType {
    Request,
    Response,
    Data,
    Ack,
    DataAck,
    CloseReq,
    Close,
    Reset,
    Sync,
    SyncAck,
    /// Codes 10..=15; the raw value is kept.
    Reserved(u8),
}

impl PacketType {
    /// Maps the low 4 bits of `code`; never fails.
    pub fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0 => PacketType::Request,
            1 => PacketType::Response,
            2 => PacketType::Data,
            3 => PacketType::Ack,
            4 => PacketType::DataAck,
            5 => PacketType::CloseReq,
            6 => PacketType::Close,
            7 => PacketType::Reset,
            8 => PacketType::Sync,
            9 => PacketType::SyncAck,
            other => PacketType::Reserved(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            PacketType::Request => 0,
            PacketType::Response => 1,
            PacketType::Data => 2,
            PacketType::Ack => 3,
            PacketType::DataAck => 4,
            PacketType::CloseReq => 5,
            PacketType::Close => 6,
            PacketType::Reset => 7,
            PacketType::Sync => 8,
            PacketType::SyncAck => 9,
            PacketType::Reserved(c) => c,
        }
    }
}

/// Wire form of [`PacketType`] in serde output; `Reserved` is checked on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum PacketTypeRepr {
    Request,
    Response,
    Data,
    Ack,
    DataAck,
    CloseReq,
    Close,
    Reset,
    Sync,
    SyncAck,
    Reserved(u8),
}

impl<'de> Deserialize<'de> for PacketType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(match PacketTypeRepr::deserialize(d)? {
            PacketTypeRepr::Request => PacketType::Request,
            PacketTypeRepr::Response => PacketType::Response,
            PacketTypeRepr::Data => PacketType::Data,
            PacketTypeRepr::Ack => PacketType::Ack,
            PacketTypeRepr::DataAck => PacketType::DataAck,
            PacketTypeRepr::CloseReq => PacketType::CloseReq,
            PacketTypeRepr::Close => PacketType::Close,
            PacketTypeRepr::Reset => PacketType::Reset,
            PacketTypeRepr::Sync => PacketType::Sync,
            PacketTypeRepr::SyncAck => PacketType::SyncAck,
            PacketTypeRepr::Reserved(code @ 10..=15) => PacketType::Reserved(code),
            PacketTypeRepr::Reserved(code) => {
                return Err(serde::de::Error::custom(format!(
                    "packet type code {code} is not reserved"
                )));
            }
        })
    }
}
