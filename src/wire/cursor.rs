//! Read-only cursor over a borrowed byte buffer.

/// Not enough bytes left at `offset` to satisfy a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    /// Cursor position when the read was attempted.
    pub offset: usize,
    /// Bytes the read required from `offset`.
    pub needed: usize,
    /// Bytes actually left from `offset`.
    pub available: usize,
}

/// 大端读取游标
///
/// `pos` 即已消费的头部长度；每次读取成功后按实际消费的字节数前进，
/// 读取失败时位置不变。
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Cursor positioned at `pos` (clamped to the buffer end).
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Fails unless at least `n` bytes are left, without consuming anything.
    pub fn require(&self, n: usize) -> Result<(), Shortfall> {
        if self.remaining() < n {
            return Err(Shortfall {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn take(&mut self, n: usize) -> Result<&'a [u8], Shortfall> {
        self.require(n)?;
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), Shortfall> {
        self.take(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, Shortfall> {
        Ok(self.take(1)?[0])
    }

    pub fn read_be_u16(&mut self) -> Result<u16, Shortfall> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_be_u24(&mut self) -> Result<u32, Shortfall> {
        let b = self.take(3)?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    pub fn read_be_u32(&mut self) -> Result<u32, Shortfall> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// 48 位大端整数：先读高 32 位，再读低 16 位。
    pub fn read_be_u48(&mut self) -> Result<u64, Shortfall> {
        self.require(6)?;
        let high = self.read_be_u32()? as u64;
        let low = self.read_be_u16()? as u64;
        Ok((high << 16) | low)
    }

    /// Everything from the cursor to the end of the buffer; moves the cursor to the end.
    pub fn rest(&mut self) -> &'a [u8] {
        let out = &self.buf[self.pos..];
        self.pos = self.buf.len();
        out
    }
}
