// Common test utilities and helper functions
//
// Builders for DATA chunks and raw chunk bytes shared by the integration tests

use sctp::DataChunk;

/// Payload lengths that cover no padding, every padding width and a large payload
pub const PAYLOAD_LENGTHS: [usize; 5] = [0, 1, 3, 4, 1200];

/// Create a deterministic payload of `len` bytes
pub fn test_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Create a chunk with every field set to a distinct value
pub fn create_test_chunk(tsn: u32, payload_len: usize) -> DataChunk {
    DataChunk::new(tsn, test_payload(payload_len))
        .with_stream_id(0x1234)
        .with_stream_seq(0xBEEF)
        .with_ppid(51) // WebRTC string
}

/// Hand-assemble raw DATA chunk bytes with an arbitrary length field
pub fn raw_chunk(flags: u8, declared_length: u16, body: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x00, flags];
    bytes.extend_from_slice(&declared_length.to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}
