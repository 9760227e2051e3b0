use thiserror::Error;

/// Reasons a chunk's contents are rejected as malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("chunk too short: declared length {declared}, minimum is {minimum}")]
    ChunkTooShort { declared: u16, minimum: u16 },

    #[error("unexpected chunk type {found}, expected {expected}")]
    UnexpectedChunkType { expected: u8, found: u8 },

    #[error("reserved flag bits set: 0x{0:02x}")]
    ReservedFlagsSet(u8),

    #[error("non-zero padding byte at offset {offset}")]
    NonZeroPadding { offset: usize },

    #[error("user data of {len} bytes exceeds limit of {max}")]
    UserDataTooLong { len: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Insufficient bytes: need {needed}, have {available}")]
    InsufficientBytes { needed: usize, available: usize },

    #[error("Insufficient space: need {needed}, have {available}")]
    InsufficientSpace { needed: usize, available: usize },

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a format error
    pub fn format(kind: FormatError) -> Self {
        Error::Format(kind)
    }

    /// Create an insufficient bytes error (reading past the end of a source buffer)
    pub fn insufficient_bytes(needed: usize, available: usize) -> Self {
        Error::InsufficientBytes { needed, available }
    }

    /// Create an insufficient space error (writing past the end of a destination buffer)
    pub fn insufficient_space(needed: usize, available: usize) -> Self {
        Error::InsufficientSpace { needed, available }
    }

    /// Create an out of range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Error::OutOfRange(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// The format error kind, if this is a format error
    pub fn format_kind(&self) -> Option<FormatError> {
        match self {
            Error::Format(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::format(FormatError::ChunkTooShort { declared: 10, minimum: 16 });
        assert_eq!(
            format!("{}", err),
            "Format error: chunk too short: declared length 10, minimum is 16"
        );

        let err = Error::insufficient_bytes(20, 12);
        assert_eq!(format!("{}", err), "Insufficient bytes: need 20, have 12");

        let err = Error::config("max_user_data too large");
        assert_eq!(format!("{}", err), "Configuration error: max_user_data too large");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = FormatError::ReservedFlagsSet(0x80).into();

        match err {
            Error::Format(FormatError::ReservedFlagsSet(bits)) => assert_eq!(bits, 0x80),
            _ => panic!("Expected format error variant"),
        }
    }

    #[test]
    fn test_format_kind() {
        let err = Error::format(FormatError::NonZeroPadding { offset: 3 });
        assert_eq!(err.format_kind(), Some(FormatError::NonZeroPadding { offset: 3 }));
        assert_eq!(Error::out_of_range("ssn").format_kind(), None);
    }
}
