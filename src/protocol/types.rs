use std::fmt;
use crate::{Error, Result};

/// Transmission Sequence Number. Arithmetic wraps modulo 2^32.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tsn(pub u32);

impl Tsn {
    /// The TSN following this one
    pub fn next(self) -> Tsn {
        Tsn(self.0.wrapping_add(1))
    }

    /// Advance by `n`, wrapping
    pub fn wrapping_add(self, n: u32) -> Tsn {
        Tsn(self.0.wrapping_add(n))
    }

    /// Serial number comparison (RFC 1982): true if `self` comes after `other`.
    /// Values exactly 2^31 apart are unordered and compare false both ways.
    pub fn is_newer_than(self, other: Tsn) -> bool {
        (self.0.wrapping_sub(other.0) as i32) > 0
    }

    /// Number of steps from `other` forward to `self`
    pub fn distance_from(self, other: Tsn) -> u32 {
        self.0.wrapping_sub(other.0)
    }
}

/// Stream identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(pub u16);

/// Stream Sequence Number. Exactly 16 bits wide; wider values are rejected, not truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ssn(pub u16);

impl Ssn {
    /// The SSN following this one, wrapping at 2^16
    pub fn next(self) -> Ssn {
        Ssn(self.0.wrapping_add(1))
    }
}

/// Payload Protocol Identifier, opaque to this layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PpId(pub u32);

impl From<u32> for Tsn {
    fn from(value: u32) -> Self {
        Tsn(value)
    }
}

impl From<u16> for StreamId {
    fn from(value: u16) -> Self {
        StreamId(value)
    }
}

impl From<u16> for Ssn {
    fn from(value: u16) -> Self {
        Ssn(value)
    }
}

impl TryFrom<u32> for Ssn {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        u16::try_from(value)
            .map(Ssn)
            .map_err(|_| Error::out_of_range(format!("Stream sequence number {} exceeds 16 bits", value)))
    }
}

impl TryFrom<usize> for Ssn {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        u16::try_from(value)
            .map(Ssn)
            .map_err(|_| Error::out_of_range(format!("Stream sequence number {} exceeds 16 bits", value)))
    }
}

impl From<u32> for PpId {
    fn from(value: u32) -> Self {
        PpId(value)
    }
}

impl fmt::Display for Tsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
