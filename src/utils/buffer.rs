use byteorder::{BigEndian, ByteOrder};
use crate::{Error, Result};

/// Round `len` up to the next multiple of `ALIGN`
pub fn padded_length<const ALIGN: usize>(len: usize) -> usize {
    len + ((ALIGN - (len % ALIGN)) % ALIGN)
}

/// Borrow `len` bytes starting at `offset`
fn window(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| Error::out_of_range("Offset overflow"))?;
    buf.get(offset..end)
        .ok_or_else(|| Error::insufficient_bytes(end, buf.len()))
}

/// Mutably borrow `len` bytes starting at `offset`
fn window_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8]> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| Error::out_of_range("Offset overflow"))?;
    let available = buf.len();
    buf.get_mut(offset..end)
        .ok_or_else(|| Error::insufficient_space(end, available))
}

/// Read u8
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
    Ok(window(buf, offset, 1)?[0])
}

/// Write u8
pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<()> {
    window_mut(buf, offset, 1)?[0] = value;
    Ok(())
}

/// Read u16 (big endian)
pub fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16> {
    Ok(BigEndian::read_u16(window(buf, offset, 2)?))
}

/// Write u16 (big endian)
pub fn write_u16_be(buf: &mut [u8], offset: usize, value: u16) -> Result<()> {
    BigEndian::write_u16(window_mut(buf, offset, 2)?, value);
    Ok(())
}

/// Read u32 (big endian)
pub fn read_u32_be(buf: &[u8], offset: usize) -> Result<u32> {
    Ok(BigEndian::read_u32(window(buf, offset, 4)?))
}

/// Write u32 (big endian)
pub fn write_u32_be(buf: &mut [u8], offset: usize, value: u32) -> Result<()> {
    BigEndian::write_u32(window_mut(buf, offset, 4)?, value);
    Ok(())
}

/// Copy `len` bytes starting at `offset` into a freshly allocated Vec
pub fn read_bytes(buf: &[u8], offset: usize, len: usize) -> Result<Vec<u8>> {
    Ok(window(buf, offset, len)?.to_vec())
}

/// Copy `data` into the buffer starting at `offset`
pub fn write_bytes(buf: &mut [u8], offset: usize, data: &[u8]) -> Result<()> {
    window_mut(buf, offset, data.len())?.copy_from_slice(data);
    Ok(())
}

/// Set `len` bytes starting at `offset` to zero
pub fn zero_fill(buf: &mut [u8], offset: usize, len: usize) -> Result<()> {
    window_mut(buf, offset, len)?.fill(0);
    Ok(())
}
