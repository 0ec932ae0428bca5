//! Bitstream I/O utilities for frame parsing.
//!
//! Provides big-endian bit-level reading over in-memory frame images.

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader, UnsignedInteger};

#[derive(Debug)]
pub struct BitstreamIoReader<R: io::Read + io::Seek> {
    bs: BitReader<R, BigEndian>,
    len: u64,
}

pub type BsIoSliceReader<'a> = BitstreamIoReader<io::Cursor<&'a [u8]>>;

impl<R> BitstreamIoReader<R>
where
    R: io::Read + io::Seek,
{
    pub fn new(read: R, len_bytes: u64) -> Self {
        Self {
            bs: BitReader::new(read),
            len: len_bytes << 3,
        }
    }

    #[inline(always)]
    pub fn get(&mut self) -> io::Result<bool> {
        self.bs.read_bit()
    }

    #[inline(always)]
    pub fn get_n<I: UnsignedInteger>(&mut self, n: u32) -> io::Result<I> {
        match self.bs.read_unsigned_var(n) {
            Ok(val) => Ok(val),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "get_n({}): out of bounds bits at {}",
                    n,
                    self.bs.position_in_bits().unwrap_or(0)
                ),
            )),
            Err(e) => Err(e),
        }
    }

    #[inline(always)]
    pub fn available(&mut self) -> io::Result<u64> {
        self.bs.position_in_bits().map(|pos| self.len - pos)
    }

    #[inline(always)]
    pub fn position(&mut self) -> io::Result<u64> {
        self.bs.position_in_bits()
    }
}

impl<'a> BsIoSliceReader<'a> {
    pub fn from_slice(buf: &'a [u8]) -> Self {
        let len = buf.len() as u64;
        let read = io::Cursor::new(buf);

        Self::new(read, len)
    }
}

impl Default for BsIoSliceReader<'_> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}

#[test]
fn reads_fields_big_endian() {
    let mut reader = BsIoSliceReader::from_slice(&[0x50, 0xF4]);

    assert_eq!(reader.get_n::<u8>(4).unwrap(), 0x5);
    assert!(!reader.get().unwrap());
    assert_eq!(reader.get_n::<u16>(11).unwrap(), 0xF4);
    assert_eq!(reader.position().unwrap(), 16);
    assert_eq!(reader.available().unwrap(), 0);
}

#[test]
fn get_n_past_end_fails() {
    let mut reader = BsIoSliceReader::from_slice(&[0xAB]);

    assert_eq!(reader.get_n::<u8>(8).unwrap(), 0xAB);

    let err = reader.get_n::<u8>(1).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}
