//! DCCP 头部解码模块
//!
//! 把一段原始字节解码为类型化的 DCCP 头部：通用头部、序列号以及由
//! Type 字段决定的扩展头部。DCCP 选项不解码，只作为尾部字节保留。

// 子模块声明
mod config;
mod error;
mod extension;
mod generic;
mod packet;
mod packet_type;
mod sequence;

// 重新导出公共接口
pub use config::DecodeOptions;
pub use error::{DecodeError, Stage};
pub use extension::{EXTENDED_ACK_LEN, ExtensionHeader, SHORT_ACK_LEN, decode_extension};
pub use generic::{FIXED_LEN, GenericHeader, MIN_GENERIC_LEN, decode_generic};
pub use packet::DccpPacket;
pub use packet_type::PacketType;
pub use sequence::{EXTENDED_SEQ_LEN, SHORT_SEQ_LEN, SequenceNumber, decode_sequence};
