use log::{trace, warn};
use crate::chunk::{ChunkHeader, CodecConfig, DataChunkFlags};
use crate::protocol::*;
use crate::{
    padded_length, read_bytes, read_u16_be, read_u32_be, write_bytes, write_u16_be,
    write_u32_be, zero_fill, Error, FormatError, Result,
};

/// DATA chunk (RFC 4960 section 3.3.1)
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   Type = 0    | Reserved|U|B|E|    Length                     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                              TSN                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |      Stream Identifier S      |   Stream Sequence Number n    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                  Payload Protocol Identifier                  |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// \                                                               \
/// /                 User Data (seq n of Stream S)                 /
/// \                                                               \
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// Flags are plain fields read at encode time. A new chunk starts out as an ordered,
/// unfragmented message (B and E set, U clear) on stream 0 with SSN 0 and PPID 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataChunk {
    flags: DataChunkFlags,
    tsn: Tsn,
    stream_id: StreamId,
    stream_seq: Ssn,
    ppid: PpId,
    user_data: Vec<u8>,
}

impl DataChunk {
    /// Create new chunk carrying `user_data`
    pub fn new(tsn: u32, user_data: Vec<u8>) -> Self {
        DataChunk {
            flags: DataChunkFlags::complete(),
            tsn: Tsn(tsn),
            stream_id: StreamId(0),
            stream_seq: Ssn(0),
            ppid: PpId(0),
            user_data,
        }
    }

    /// Always DATA
    pub fn chunk_type(&self) -> ChunkType {
        ChunkType::Data
    }

    pub fn flags(&self) -> DataChunkFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: DataChunkFlags) {
        self.flags = flags;
    }

    pub fn with_flags(mut self, flags: DataChunkFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn unordered(&self) -> bool {
        self.flags.unordered
    }

    pub fn set_unordered(&mut self, unordered: bool) {
        self.flags.unordered = unordered;
    }

    pub fn with_unordered(mut self, unordered: bool) -> Self {
        self.flags.unordered = unordered;
        self
    }

    pub fn beginning(&self) -> bool {
        self.flags.beginning
    }

    pub fn set_beginning(&mut self, beginning: bool) {
        self.flags.beginning = beginning;
    }

    pub fn with_beginning(mut self, beginning: bool) -> Self {
        self.flags.beginning = beginning;
        self
    }

    pub fn ending(&self) -> bool {
        self.flags.ending
    }

    pub fn set_ending(&mut self, ending: bool) {
        self.flags.ending = ending;
    }

    pub fn with_ending(mut self, ending: bool) -> Self {
        self.flags.ending = ending;
        self
    }

    pub fn tsn(&self) -> Tsn {
        self.tsn
    }

    pub fn set_tsn(&mut self, tsn: u32) {
        self.tsn = Tsn(tsn);
    }

    pub fn stream_id(&self) -> StreamId {
        self.stream_id
    }

    pub fn set_stream_id(&mut self, stream_id: u16) {
        self.stream_id = StreamId(stream_id);
    }

    pub fn with_stream_id(mut self, stream_id: u16) -> Self {
        self.stream_id = StreamId(stream_id);
        self
    }

    pub fn stream_seq(&self) -> Ssn {
        self.stream_seq
    }

    pub fn set_stream_seq(&mut self, stream_seq: u16) {
        self.stream_seq = Ssn(stream_seq);
    }

    pub fn with_stream_seq(mut self, stream_seq: u16) -> Self {
        self.stream_seq = Ssn(stream_seq);
        self
    }

    pub fn ppid(&self) -> PpId {
        self.ppid
    }

    pub fn set_ppid(&mut self, ppid: u32) {
        self.ppid = PpId(ppid);
    }

    pub fn with_ppid(mut self, ppid: u32) -> Self {
        self.ppid = PpId(ppid);
        self
    }

    pub fn user_data(&self) -> &[u8] {
        &self.user_data
    }

    pub fn set_user_data(&mut self, user_data: Vec<u8>) {
        self.user_data = user_data;
    }

    /// Take ownership of the user data
    pub fn into_user_data(self) -> Vec<u8> {
        self.user_data
    }

    /// Check if this chunk holds a whole message (B and E set)
    pub fn is_complete(&self) -> bool {
        self.flags.beginning && self.flags.ending
    }

    /// Check if this chunk starts a multi-chunk message
    pub fn is_first_fragment(&self) -> bool {
        self.flags.beginning && !self.flags.ending
    }

    /// Check if this chunk continues a multi-chunk message
    pub fn is_middle_fragment(&self) -> bool {
        !self.flags.beginning && !self.flags.ending
    }

    /// Check if this chunk ends a multi-chunk message
    pub fn is_last_fragment(&self) -> bool {
        !self.flags.beginning && self.flags.ending
    }

    /// Value of the Chunk Length field: header, fixed parameters and user data, unpadded
    pub fn declared_length(&self) -> usize {
        DATA_CHUNK_MIN_LENGTH + self.user_data.len()
    }

    /// Space the chunk occupies in a packet, including padding
    pub fn wire_length(&self) -> usize {
        padded_length::<CHUNK_ALIGNMENT>(self.declared_length())
    }

    /// Header this chunk encodes with
    pub fn header(&self) -> Result<ChunkHeader> {
        let declared = self.declared_length();
        let length = u16::try_from(declared).map_err(|_| {
            Error::out_of_range(format!(
                "DATA chunk length {} does not fit the 16-bit length field",
                declared
            ))
        })?;

        Ok(ChunkHeader::new(ChunkType::Data, self.flags.as_raw(), length))
    }

    /// Encode at `offset` with the default configuration.
    ///
    /// Returns the padded length so the caller can advance past this chunk.
    pub fn encode(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        self.encode_with(buf, offset, &CodecConfig::default())
    }

    /// Encode at `offset`. Nothing is written if the chunk cannot be encoded.
    pub fn encode_with(&self, buf: &mut [u8], offset: usize, config: &CodecConfig) -> Result<usize> {
        if self.user_data.len() > config.max_user_data {
            return Err(Error::out_of_range(format!(
                "User data of {} bytes exceeds limit of {}",
                self.user_data.len(),
                config.max_user_data
            )));
        }

        let header = self.header()?;
        let declared = self.declared_length();
        let wire = self.wire_length();

        let end = offset.saturating_add(wire);
        if buf.len() < end {
            return Err(Error::insufficient_space(end, buf.len()));
        }

        header.encode(buf, offset)?;

        let fixed = offset + CHUNK_HEADER_SIZE;
        write_u32_be(buf, fixed + DATA_TSN_OFFSET, self.tsn.0)?;
        write_u16_be(buf, fixed + DATA_STREAM_ID_OFFSET, self.stream_id.0)?;
        write_u16_be(buf, fixed + DATA_STREAM_SEQ_OFFSET, self.stream_seq.0)?;
        write_u32_be(buf, fixed + DATA_PPID_OFFSET, self.ppid.0)?;

        write_bytes(buf, fixed + DATA_FIXED_PARAMS_SIZE, &self.user_data)?;

        if config.zero_padding {
            zero_fill(buf, offset + declared, wire - declared)?;
        }

        trace!(
            "Encoded DATA chunk tsn={} stream={} ssn={} at offset {}: declared={}, wire={}",
            self.tsn, self.stream_id, self.stream_seq, offset, declared, wire
        );

        Ok(wire)
    }

    /// Encode into a new buffer of exactly `wire_length` bytes, zero padded
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.wire_length()];
        self.encode(&mut buf, 0)?;
        Ok(buf)
    }

    /// Decode the chunk at `offset` with the default configuration
    pub fn decode(buf: &[u8], offset: usize) -> Result<Self> {
        Self::decode_with(buf, offset, &CodecConfig::default())
    }

    /// Decode the chunk at the start of `buf`
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        Self::decode(buf, 0)
    }

    /// Decode the chunk at `offset`.
    ///
    /// Reads nothing before `offset` and, unless padding is verified, nothing past
    /// `offset + declared length`. The user data is copied out of `buf`.
    pub fn decode_with(buf: &[u8], offset: usize, config: &CodecConfig) -> Result<Self> {
        let header = ChunkHeader::decode(buf, offset)?;

        if config.verify_chunk_type && !header.chunk_type.is_data() {
            warn!("Rejecting {} chunk at offset {}: expected DATA", header.chunk_type, offset);
            return Err(Error::format(FormatError::UnexpectedChunkType {
                expected: CHUNK_TYPE_DATA,
                found: header.chunk_type.id(),
            }));
        }

        let declared = header.length as usize;
        if declared < DATA_CHUNK_MIN_LENGTH {
            warn!(
                "Rejecting DATA chunk at offset {}: declared length {} below minimum {}",
                offset, declared, DATA_CHUNK_MIN_LENGTH
            );
            return Err(Error::format(FormatError::ChunkTooShort {
                declared: header.length,
                minimum: DATA_CHUNK_MIN_LENGTH as u16,
            }));
        }

        let reserved = DataChunkFlags::reserved_bits(header.flags);
        if config.reject_reserved_flags && reserved != 0 {
            warn!("Rejecting DATA chunk at offset {}: reserved flags 0x{:02x}", offset, reserved);
            return Err(Error::format(FormatError::ReservedFlagsSet(reserved)));
        }

        let end = offset.saturating_add(declared);
        if buf.len() < end {
            return Err(Error::insufficient_bytes(end, buf.len()));
        }

        let payload_len = declared - DATA_CHUNK_MIN_LENGTH;
        if payload_len > config.max_user_data {
            return Err(Error::format(FormatError::UserDataTooLong {
                len: payload_len,
                max: config.max_user_data,
            }));
        }

        if config.verify_padding {
            Self::check_padding(buf, end, offset.saturating_add(header.padded_length()))?;
        }

        let fixed = offset + CHUNK_HEADER_SIZE;
        let tsn = Tsn(read_u32_be(buf, fixed + DATA_TSN_OFFSET)?);
        let stream_id = StreamId(read_u16_be(buf, fixed + DATA_STREAM_ID_OFFSET)?);
        let stream_seq = Ssn(read_u16_be(buf, fixed + DATA_STREAM_SEQ_OFFSET)?);
        let ppid = PpId(read_u32_be(buf, fixed + DATA_PPID_OFFSET)?);

        let user_data = if payload_len > 0 {
            read_bytes(buf, fixed + DATA_FIXED_PARAMS_SIZE, payload_len)?
        } else {
            Vec::new()
        };

        trace!(
            "Decoded DATA chunk tsn={} stream={} ssn={} at offset {}: {} bytes of user data",
            tsn, stream_id, stream_seq, offset, payload_len
        );

        Ok(DataChunk {
            flags: DataChunkFlags::from_raw(header.flags),
            tsn,
            stream_id,
            stream_seq,
            ppid,
            user_data,
        })
    }

    fn check_padding(buf: &[u8], start: usize, end: usize) -> Result<()> {
        let padding = buf
            .get(start..end)
            .ok_or_else(|| Error::insufficient_bytes(end, buf.len()))?;

        match padding.iter().position(|b| *b != 0) {
            Some(i) => Err(Error::format(FormatError::NonZeroPadding { offset: start + i })),
            None => Ok(()),
        }
    }
}
