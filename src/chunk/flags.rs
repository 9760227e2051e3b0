use crate::protocol::{
    DATA_FLAGS_RESERVED_MASK, DATA_FLAG_BEGINNING, DATA_FLAG_ENDING, DATA_FLAG_UNORDERED,
};

/// Flags of a DATA chunk: the U, B and E bits.
///
/// Reserved bits are never stored, so a value produced from any byte always encodes
/// with the reserved bits cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DataChunkFlags {
    pub unordered: bool,
    pub beginning: bool,
    pub ending: bool,
}

impl DataChunkFlags {
    /// Create flags from the three bits
    pub fn new(unordered: bool, beginning: bool, ending: bool) -> Self {
        DataChunkFlags { unordered, beginning, ending }
    }

    /// Ordered, unfragmented message (B and E set)
    pub fn complete() -> Self {
        DataChunkFlags::new(false, true, true)
    }

    /// Decompose a flags byte, ignoring reserved bits
    pub fn from_raw(raw: u8) -> Self {
        DataChunkFlags {
            unordered: raw & DATA_FLAG_UNORDERED != 0,
            beginning: raw & DATA_FLAG_BEGINNING != 0,
            ending: raw & DATA_FLAG_ENDING != 0,
        }
    }

    /// Compose the flags byte
    pub fn as_raw(&self) -> u8 {
        let mut raw = 0;
        if self.unordered {
            raw |= DATA_FLAG_UNORDERED;
        }
        if self.beginning {
            raw |= DATA_FLAG_BEGINNING;
        }
        if self.ending {
            raw |= DATA_FLAG_ENDING;
        }
        raw
    }

    /// Reserved bits present in a raw flags byte
    pub fn reserved_bits(raw: u8) -> u8 {
        raw & DATA_FLAGS_RESERVED_MASK
    }
}

impl From<u8> for DataChunkFlags {
    fn from(raw: u8) -> Self {
        DataChunkFlags::from_raw(raw)
    }
}

impl From<DataChunkFlags> for u8 {
    fn from(flags: DataChunkFlags) -> Self {
        flags.as_raw()
    }
}
