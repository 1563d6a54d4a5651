//! 抓包样本
//!
//! 几个真实抓到的 DCCP 包（iperf3，端口 5201），供测试和 CLI `--sample` 使用。

/// DCCP-Request，X=1，带服务码与若干选项
pub const REQUEST: &[u8] = &[
    0xd9, 0x91, 0x14, 0x51, 0x12, 0x00, 0xe8, 0xfb, 0x01, 0x00, 0x5f, 0x34, 0x7b, 0x1c, 0x28, 0x2c,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2e, 0x0b, 0x01, 0xac, 0xd6, 0xf7, 0x86, 0xe7, 0xf4, 0xb2,
    0x15, 0x2e, 0x07, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x29, 0x06, 0x16, 0xfc, 0x49, 0x08, 0x20, 0x06,
    0x01, 0x02, 0x03, 0x05, 0x22, 0x06, 0x01, 0x02, 0x03, 0x05, 0x01, 0x20, 0x04, 0x02, 0x00, 0x01,
    0x20, 0x04, 0x04, 0x01, 0x22, 0x04, 0x0a, 0x00,
];

/// DCCP-Request，36921 -> 5201，X=1（选项已截掉）
pub const CLIENT_REQUEST: &[u8] = &[
    0x90, 0x39, 0x14, 0x51, 0x12, 0x00, 0xf9, 0xd2, 0x01, 0x00, 0xa9, 0x1e, 0x8a, 0xb5, 0x40, 0x79,
    0x00, 0x00, 0x00, 0x00,
];

/// DCCP-Ack，5201 -> 36921，确认 [`CLIENT_REQUEST`] 之后的序列号
pub const SERVER_ACK: &[u8] = &[
    0x14, 0x51, 0x90, 0x39, 0x06, 0x00, 0x67, 0xf4, 0x07, 0x00, 0xcd, 0xe3, 0xea, 0xdf, 0x6d, 0xcf,
    0x00, 0x00, 0xa9, 0x1e, 0x8a, 0xb5, 0x40, 0x7a,
];

