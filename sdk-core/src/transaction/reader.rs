//! Bounds-checked little-endian cursor used by the decoder.

use super::codec::CodecError;

pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Takes `len` bytes or fails naming `field`.
    pub(crate) fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::malformed(format!(
                "{} needs {} bytes, {} left",
                field,
                len,
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub(crate) fn array<const N: usize>(&mut self, field: &str) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    pub(crate) fn u8(&mut self, field: &str) -> Result<u8, CodecError> {
        Ok(self.array::<1>(field)?[0])
    }

    pub(crate) fn u16(&mut self, field: &str) -> Result<u16, CodecError> {
        self.array(field).map(u16::from_le_bytes)
    }

    pub(crate) fn i16(&mut self, field: &str) -> Result<i16, CodecError> {
        self.array(field).map(i16::from_le_bytes)
    }

    pub(crate) fn u32(&mut self, field: &str) -> Result<u32, CodecError> {
        self.array(field).map(u32::from_le_bytes)
    }

    pub(crate) fn u64(&mut self, field: &str) -> Result<u64, CodecError> {
        self.array(field).map(u64::from_le_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut reader = Reader::new(&bytes);
        assert_eq!(reader.u8("a").unwrap(), 0x01);
        assert_eq!(reader.u16("b").unwrap(), 0x0302);
        assert_eq!(reader.u32("c").unwrap(), 0x0706_0504);
        assert!(reader.is_empty());
    }

    #[test]
    fn short_read_names_field() {
        let mut reader = Reader::new(&[0u8; 3]);
        match reader.u64("max fee") {
            Err(CodecError::MalformedPayload { reason }) => assert!(reason.contains("max fee")),
            other => panic!("expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn failed_take_does_not_advance() {
        let mut reader = Reader::new(&[1, 2]);
        assert!(reader.take(3, "x").is_err());
        assert_eq!(reader.remaining(), 2);
    }
}
