// Integration tests for the DATA chunk codec
//
// These tests exercise the public encode/decode surface the way a packet parser would

mod common;

use common::{create_test_chunk, raw_chunk, test_payload, PAYLOAD_LENGTHS};
use sctp::{
    parse_chunk_header, CodecConfig, DataChunk, DataChunkFlags, Error, FormatError, PpId, Ssn,
    StreamId, Tsn,
};

#[test]
fn test_round_trip_payload_lengths() {
    for len in PAYLOAD_LENGTHS {
        let chunk = create_test_chunk(0xCAFE_0000 + len as u32, len);
        let bytes = chunk.to_bytes().unwrap();

        assert_eq!(bytes.len(), chunk.wire_length());
        let decoded = DataChunk::decode(&bytes, 0).unwrap();
        assert_eq!(decoded, chunk, "round trip failed for payload length {}", len);
    }
}

#[test]
fn test_length_arithmetic() {
    for len in PAYLOAD_LENGTHS {
        let chunk = create_test_chunk(1, len);
        let declared = 16 + len;
        assert_eq!(chunk.declared_length(), declared);
        assert_eq!(chunk.wire_length(), declared.div_ceil(4) * 4);
    }

    let one = create_test_chunk(1, 1);
    assert_eq!((one.declared_length(), one.wire_length()), (17, 20));

    let four = create_test_chunk(1, 4);
    assert_eq!((four.declared_length(), four.wire_length()), (20, 20));
}

#[test]
fn test_declared_length_is_unpadded_on_the_wire() {
    let bytes = create_test_chunk(1, 1).to_bytes().unwrap();
    assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 17);
    assert_eq!(bytes.len(), 20);
}

#[test]
fn test_flag_composition() {
    for u in [false, true] {
        for b in [false, true] {
            for e in [false, true] {
                let chunk = create_test_chunk(9, 3).with_flags(DataChunkFlags::new(u, b, e));
                let bytes = chunk.to_bytes().unwrap();

                assert_eq!(bytes[1], (u as u8) * 4 + (b as u8) * 2 + (e as u8));

                let decoded = DataChunk::decode(&bytes, 0).unwrap();
                assert_eq!(decoded.unordered(), u);
                assert_eq!(decoded.beginning(), b);
                assert_eq!(decoded.ending(), e);
            }
        }
    }
}

#[test]
fn test_truncation_failure() {
    let bytes = raw_chunk(0x03, 10, &[0u8; 12]);
    match DataChunk::decode(&bytes, 0) {
        Err(Error::Format(FormatError::ChunkTooShort { declared, minimum })) => {
            assert_eq!(declared, 10);
            assert_eq!(minimum, 16);
        }
        other => panic!("Expected chunk too short, got {:?}", other),
    }
}

#[test]
fn test_minimum_length_decodes_empty_payload() {
    let bytes = raw_chunk(0x03, 16, &[0, 0, 0, 1, 0, 2, 0, 3, 0, 0, 0, 4]);
    let chunk = DataChunk::decode(&bytes, 0).unwrap();

    assert!(chunk.user_data().is_empty());
    assert_eq!(chunk.tsn(), Tsn(1));
    assert_eq!(chunk.stream_id(), StreamId(2));
    assert_eq!(chunk.stream_seq(), Ssn(3));
    assert_eq!(chunk.ppid(), PpId(4));
}

#[test]
fn test_offset_isolation() {
    let chunk = create_test_chunk(77, 5);
    let wire = chunk.wire_length();
    let offset = 13;

    let mut buf = vec![0xEE; offset + wire + 9];
    assert_eq!(chunk.encode(&mut buf, offset).unwrap(), wire);

    // Bytes outside the chunk's window are untouched by encode
    assert!(buf[..offset].iter().all(|b| *b == 0xEE));
    assert!(buf[offset + wire..].iter().all(|b| *b == 0xEE));

    let decoded = DataChunk::decode(&buf, offset).unwrap();
    assert_eq!(decoded, chunk);

    // Changing everything outside the window does not affect decode
    let mut scrambled = buf.clone();
    scrambled[..offset].fill(0x00);
    scrambled[offset + wire..].fill(0xFF);
    assert_eq!(DataChunk::decode(&scrambled, offset).unwrap(), chunk);

    // The window alone is enough
    let window = &buf[..offset + wire];
    assert_eq!(DataChunk::decode(window, offset).unwrap(), chunk);
}

#[test]
fn test_decoded_payload_is_a_copy() {
    let mut bytes = create_test_chunk(5, 4).to_bytes().unwrap();
    let decoded = DataChunk::decode(&bytes, 0).unwrap();

    bytes[16..20].fill(0xFF);
    assert_eq!(decoded.user_data(), &test_payload(4)[..]);
}

#[test]
fn test_byte_order() {
    let bytes = DataChunk::new(0x01020304, vec![]).to_bytes().unwrap();
    assert_eq!(&bytes[4..8], &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_fixed_block_layout() {
    let bytes = create_test_chunk(0xA0B0C0D0, 0).to_bytes().unwrap();

    assert_eq!(&bytes[4..8], &[0xA0, 0xB0, 0xC0, 0xD0]);
    assert_eq!(&bytes[8..10], &[0x12, 0x34]);
    assert_eq!(&bytes[10..12], &[0xBE, 0xEF]);
    assert_eq!(&bytes[12..16], &[0x00, 0x00, 0x00, 51]);
}

#[test]
fn test_short_buffers_are_errors_not_panics() {
    let bytes = create_test_chunk(1, 8).to_bytes().unwrap();

    for cut in 0..24 {
        let result = DataChunk::decode(&bytes[..cut], 0);
        assert!(result.is_err(), "decode of {} bytes should fail", cut);
    }
    assert!(DataChunk::decode(&bytes, bytes.len()).is_err());
    assert!(DataChunk::decode(&bytes, usize::MAX).is_err());

    let mut small = vec![0u8; 10];
    assert!(matches!(
        create_test_chunk(1, 0).encode(&mut small, 0),
        Err(Error::InsufficientSpace { needed: 16, available: 10 })
    ));
}

#[test]
fn test_strict_config_round_trip() {
    let strict = CodecConfig::strict();
    for len in PAYLOAD_LENGTHS {
        let chunk = create_test_chunk(3, len);
        let mut buf = vec![0xEE; chunk.wire_length()];
        chunk.encode_with(&mut buf, 0, &strict).unwrap();
        assert_eq!(DataChunk::decode_with(&buf, 0, &strict).unwrap(), chunk);
    }
}

#[test]
fn test_walk_packet_body() {
    let first = create_test_chunk(100, 3).with_flags(DataChunkFlags::new(false, true, false));
    let last = create_test_chunk(101, 2).with_flags(DataChunkFlags::new(false, false, true));

    let mut body = vec![0u8; first.wire_length() + last.wire_length()];
    let pos = first.encode(&mut body, 0).unwrap();
    last.encode(&mut body, pos).unwrap();

    let (header, next) = parse_chunk_header(&body, 0).unwrap();
    assert_eq!(header.length, 19);
    assert_eq!(next, 20);

    let decoded_first = DataChunk::decode(&body, 0).unwrap();
    let decoded_last = DataChunk::decode(&body, next).unwrap();
    assert!(decoded_first.is_first_fragment());
    assert!(decoded_last.is_last_fragment());
    assert!(decoded_last.tsn().is_newer_than(decoded_first.tsn()));
}
