
mod config;
mod data;
mod flags;
mod header;

pub use config::*;
pub use data::*;
pub use flags::*;
pub use header::*;

use crate::Result;

/// Parse the chunk header at `offset` and locate the chunk that follows it.
///
/// Returns the header and the offset just past this chunk's padding.
pub fn parse_chunk_header(buf: &[u8], offset: usize) -> Result<(ChunkHeader, usize)> {
    let header = ChunkHeader::decode(buf, offset)?;
    let next = offset.saturating_add(header.padded_length());
    Ok((header, next))
}
