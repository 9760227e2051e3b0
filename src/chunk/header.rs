use log::debug;
use crate::protocol::{ChunkType, CHUNK_ALIGNMENT, CHUNK_HEADER_SIZE};
use crate::{padded_length, read_u16_be, read_u8, write_u16_be, write_u8, Error, Result};

/// Common prefix of every SCTP chunk
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Chunk Type  | Chunk  Flags  |        Chunk Length           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// `length` is the declared length: header plus value, excluding trailing padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub chunk_type: ChunkType,
    pub flags: u8,
    pub length: u16,
}

impl ChunkHeader {
    /// Create new header
    pub fn new(chunk_type: ChunkType, flags: u8, length: u16) -> Self {
        ChunkHeader { chunk_type, flags, length }
    }

    /// Write the 4-byte header at `offset`, returning the number of bytes written
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        let end = offset.saturating_add(CHUNK_HEADER_SIZE);
        if buf.len() < end {
            return Err(Error::insufficient_space(end, buf.len()));
        }

        write_u8(buf, offset, self.chunk_type.id())?;
        write_u8(buf, offset + 1, self.flags)?;
        write_u16_be(buf, offset + 2, self.length)?;

        Ok(CHUNK_HEADER_SIZE)
    }

    /// Read the 4-byte header at `offset`
    pub fn decode(buf: &[u8], offset: usize) -> Result<Self> {
        let end = offset.saturating_add(CHUNK_HEADER_SIZE);
        if buf.len() < end {
            return Err(Error::insufficient_bytes(end, buf.len()));
        }

        let header = ChunkHeader {
            chunk_type: ChunkType::from_id(read_u8(buf, offset)?),
            flags: read_u8(buf, offset + 1)?,
            length: read_u16_be(buf, offset + 2)?,
        };

        debug!(
            "Parsed {} chunk header at offset {}: flags=0x{:02x}, length={}",
            header.chunk_type, offset, header.flags, header.length
        );

        Ok(header)
    }

    /// Declared length rounded up to the chunk alignment
    pub fn padded_length(&self) -> usize {
        padded_length::<CHUNK_ALIGNMENT>(self.length as usize)
    }

    /// Length of the value following the header, as declared
    pub fn value_length(&self) -> usize {
        (self.length as usize).saturating_sub(CHUNK_HEADER_SIZE)
    }
}
