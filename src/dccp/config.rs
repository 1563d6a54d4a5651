//! 解码配置

use serde::{Deserialize, Serialize};

/// 解码选项
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Data Offset 小于实际解码的头部长度时直接报错（默认只打 warn 日志）
    #[serde(default)]
    pub strict_offset: bool,
}
