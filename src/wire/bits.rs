//! 位域提取

/// 从一个字节中取出 `width` 位的子字段，`shift` 为最低位的位置。
///
/// 例如 `bits(0x07, 1, 4)` 取 bit1..=bit4，结果为 `0x3`。
pub fn bits(byte: u8, shift: u32, width: u32) -> u8 {
    debug_assert!(width >= 1 && shift + width <= 8);
    let mask = (1u16 << width) - 1;
    (((byte as u16) >> shift) & mask) as u8
}

/// 单个标志位
pub fn bit_flag(byte: u8, shift: u32) -> bool {
    bits(byte, shift, 1) == 1
}
