// Chunk types (RFC 4960 section 3.2)
pub const CHUNK_TYPE_DATA: u8 = 0;
pub const CHUNK_TYPE_INIT: u8 = 1;
pub const CHUNK_TYPE_INIT_ACK: u8 = 2;
pub const CHUNK_TYPE_SACK: u8 = 3;
pub const CHUNK_TYPE_HEARTBEAT: u8 = 4;
pub const CHUNK_TYPE_HEARTBEAT_ACK: u8 = 5;
pub const CHUNK_TYPE_ABORT: u8 = 6;
pub const CHUNK_TYPE_SHUTDOWN: u8 = 7;
pub const CHUNK_TYPE_SHUTDOWN_ACK: u8 = 8;
pub const CHUNK_TYPE_ERROR: u8 = 9;
pub const CHUNK_TYPE_COOKIE_ECHO: u8 = 10;
pub const CHUNK_TYPE_COOKIE_ACK: u8 = 11;
pub const CHUNK_TYPE_ECNE: u8 = 12;
pub const CHUNK_TYPE_CWR: u8 = 13;
pub const CHUNK_TYPE_SHUTDOWN_COMPLETE: u8 = 14;

// DATA chunk flag bits
pub const DATA_FLAG_UNORDERED: u8 = 0b0000_0100;
pub const DATA_FLAG_BEGINNING: u8 = 0b0000_0010;
pub const DATA_FLAG_ENDING: u8 = 0b0000_0001;
pub const DATA_FLAGS_RESERVED_MASK: u8 = 0b1111_1000;

// Lengths
pub const CHUNK_HEADER_SIZE: usize = 4;
pub const CHUNK_ALIGNMENT: usize = 4;
pub const DATA_FIXED_PARAMS_SIZE: usize = 12;
pub const DATA_CHUNK_MIN_LENGTH: usize = CHUNK_HEADER_SIZE + DATA_FIXED_PARAMS_SIZE;
pub const MAX_CHUNK_LENGTH: usize = u16::MAX as usize;
pub const MAX_USER_DATA_LENGTH: usize = MAX_CHUNK_LENGTH - DATA_CHUNK_MIN_LENGTH;

// Fixed parameter offsets, relative to the start of the fixed block
pub const DATA_TSN_OFFSET: usize = 0;
pub const DATA_STREAM_ID_OFFSET: usize = 4;
pub const DATA_STREAM_SEQ_OFFSET: usize = 6;
pub const DATA_PPID_OFFSET: usize = 8;
