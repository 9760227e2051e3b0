use std::fmt;
use crate::protocol::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkType {
    /// Payload data
    Data,

    /// Association setup
    Init,
    InitAck,

    /// Selective acknowledgement
    Sack,

    /// Path liveness
    Heartbeat,
    HeartbeatAck,

    /// Association teardown
    Abort,
    Shutdown,
    ShutdownAck,
    ShutdownComplete,

    /// Operation error
    Error,

    /// Cookie exchange
    CookieEcho,
    CookieAck,

    /// Explicit congestion notification
    Ecne,
    Cwr,

    /// Unknown type
    Unknown(u8),
}

impl ChunkType {
    /// Create from chunk type ID
    pub fn from_id(id: u8) -> Self {
        match id {
            CHUNK_TYPE_DATA => ChunkType::Data,
            CHUNK_TYPE_INIT => ChunkType::Init,
            CHUNK_TYPE_INIT_ACK => ChunkType::InitAck,
            CHUNK_TYPE_SACK => ChunkType::Sack,
            CHUNK_TYPE_HEARTBEAT => ChunkType::Heartbeat,
            CHUNK_TYPE_HEARTBEAT_ACK => ChunkType::HeartbeatAck,
            CHUNK_TYPE_ABORT => ChunkType::Abort,
            CHUNK_TYPE_SHUTDOWN => ChunkType::Shutdown,
            CHUNK_TYPE_SHUTDOWN_ACK => ChunkType::ShutdownAck,
            CHUNK_TYPE_ERROR => ChunkType::Error,
            CHUNK_TYPE_COOKIE_ECHO => ChunkType::CookieEcho,
            CHUNK_TYPE_COOKIE_ACK => ChunkType::CookieAck,
            CHUNK_TYPE_ECNE => ChunkType::Ecne,
            CHUNK_TYPE_CWR => ChunkType::Cwr,
            CHUNK_TYPE_SHUTDOWN_COMPLETE => ChunkType::ShutdownComplete,
            _ => ChunkType::Unknown(id),
        }
    }

    /// Get the wire ID
    pub fn id(&self) -> u8 {
        match self {
            ChunkType::Data => CHUNK_TYPE_DATA,
            ChunkType::Init => CHUNK_TYPE_INIT,
            ChunkType::InitAck => CHUNK_TYPE_INIT_ACK,
            ChunkType::Sack => CHUNK_TYPE_SACK,
            ChunkType::Heartbeat => CHUNK_TYPE_HEARTBEAT,
            ChunkType::HeartbeatAck => CHUNK_TYPE_HEARTBEAT_ACK,
            ChunkType::Abort => CHUNK_TYPE_ABORT,
            ChunkType::Shutdown => CHUNK_TYPE_SHUTDOWN,
            ChunkType::ShutdownAck => CHUNK_TYPE_SHUTDOWN_ACK,
            ChunkType::Error => CHUNK_TYPE_ERROR,
            ChunkType::CookieEcho => CHUNK_TYPE_COOKIE_ECHO,
            ChunkType::CookieAck => CHUNK_TYPE_COOKIE_ACK,
            ChunkType::Ecne => CHUNK_TYPE_ECNE,
            ChunkType::Cwr => CHUNK_TYPE_CWR,
            ChunkType::ShutdownComplete => CHUNK_TYPE_SHUTDOWN_COMPLETE,
            ChunkType::Unknown(id) => *id,
        }
    }

    /// Check if this chunk carries user data
    pub fn is_data(&self) -> bool {
        matches!(self, ChunkType::Data)
    }
}

impl From<u8> for ChunkType {
    fn from(id: u8) -> Self {
        ChunkType::from_id(id)
    }
}

impl From<ChunkType> for u8 {
    fn from(chunk_type: ChunkType) -> Self {
        chunk_type.id()
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChunkType::Data => "DATA",
            ChunkType::Init => "INIT",
            ChunkType::InitAck => "INIT ACK",
            ChunkType::Sack => "SACK",
            ChunkType::Heartbeat => "HEARTBEAT",
            ChunkType::HeartbeatAck => "HEARTBEAT ACK",
            ChunkType::Abort => "ABORT",
            ChunkType::Shutdown => "SHUTDOWN",
            ChunkType::ShutdownAck => "SHUTDOWN ACK",
            ChunkType::Error => "ERROR",
            ChunkType::CookieEcho => "COOKIE ECHO",
            ChunkType::CookieAck => "COOKIE ACK",
            ChunkType::Ecne => "ECNE",
            ChunkType::Cwr => "CWR",
            ChunkType::ShutdownComplete => "SHUTDOWN COMPLETE",
            ChunkType::Unknown(id) => return write!(f, "Unknown({})", id),
        };
        f.write_str(name)
    }
}
