//! Bounds-checked forward reader over a borrowed byte slice.

use crate::error::{EchError, EchResult};

/// Forward-only reader. Every read proves it fits before touching the
/// buffer, so a failed read never yields partial data and never moves the
/// position.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    /// Absolute position of `data[0]` in the outermost buffer, used only to
    /// report offsets in errors.
    base: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            base: 0,
        }
    }

    /// Start reading `data` at `offset`. An offset past the end is clamped,
    /// leaving nothing to read.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            pos: offset.min(data.len()),
            base: 0,
        }
    }

    /// Reader over a sub-slice that starts at absolute position `base` of
    /// the enclosing buffer.
    pub fn nested(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Absolute read position.
    pub fn position(&self) -> usize {
        self.base + self.pos
    }

    fn ensure(&self, needed: usize) -> EchResult<()> {
        if needed > self.remaining() {
            return Err(EchError::BufferOverflow {
                needed,
                available: self.remaining(),
                offset: self.position(),
            });
        }
        Ok(())
    }

    /// Next byte without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> EchResult<u8> {
        self.ensure(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Big-endian u16.
    pub fn read_u16(&mut self) -> EchResult<u16> {
        self.ensure(2)?;
        let value = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    pub fn read_bytes(&mut self, len: usize) -> EchResult<&'a [u8]> {
        self.ensure(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
