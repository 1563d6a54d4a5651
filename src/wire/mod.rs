//! 字节缓冲读取工具
//!
//! 提供大端定长字段读取、位域提取，以及跟踪已消费头部长度的游标。

mod bits;
mod cursor;

pub use bits::{bit_flag, bits};
pub use cursor::{Cursor, Shortfall};
