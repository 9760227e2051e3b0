// DATA chunk encode/decode example
//
// This example demonstrates:
// - Splitting a user message into fragment chunks
// - Encoding them back to back into one buffer at explicit offsets
// - Walking the buffer and decoding each chunk again
//
// Usage:
//   RUST_LOG=trace cargo run --example encode_decode

use sctp::{parse_chunk_header, DataChunk, DataChunkFlags, Result};
use log::info;

const FRAGMENT_SIZE: usize = 6;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let message = b"hello, association".to_vec();
    let fragments: Vec<&[u8]> = message.chunks(FRAGMENT_SIZE).collect();
    let last = fragments.len() - 1;

    let chunks: Vec<DataChunk> = fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            DataChunk::new(1000 + i as u32, fragment.to_vec())
                .with_stream_id(1)
                .with_stream_seq(0)
                .with_ppid(51)
                .with_flags(DataChunkFlags::new(false, i == 0, i == last))
        })
        .collect();

    let total: usize = chunks.iter().map(DataChunk::wire_length).sum();
    let mut buf = vec![0u8; total];

    let mut offset = 0;
    for chunk in &chunks {
        let written = chunk.encode(&mut buf, offset)?;
        info!(
            "Encoded TSN {} at offset {} ({} declared, {} on the wire)",
            chunk.tsn(),
            offset,
            chunk.declared_length(),
            written
        );
        offset += written;
    }

    let mut reassembled = Vec::new();
    let mut offset = 0;
    while offset < buf.len() {
        let (header, next) = parse_chunk_header(&buf, offset)?;
        let chunk = DataChunk::decode(&buf, offset)?;
        info!(
            "Decoded {} chunk TSN {}: B={} E={} {} bytes",
            header.chunk_type,
            chunk.tsn(),
            chunk.beginning(),
            chunk.ending(),
            chunk.user_data().len()
        );
        reassembled.extend_from_slice(chunk.user_data());
        offset = next;
    }

    info!("Reassembled: {}", String::from_utf8_lossy(&reassembled));
    assert_eq!(reassembled, message);

    Ok(())
}
