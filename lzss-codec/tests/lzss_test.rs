//! LZSS integration tests covering the format contract.

use lzss_codec::{
    LzssConfig, LzssDecoder, LzssEncoder, LzssError, LzssToken, compress, compress_with_stats,
    decompress,
};

/// Unique 18-byte pattern whose 2-byte prefixes never occur in [`filler`].
fn marker() -> Vec<u8> {
    (200..218).collect()
}

/// Ramp over 0..100, never touching the marker's byte range.
fn filler(len: usize) -> Vec<u8> {
    (0..len).map(|k| (k % 100) as u8).collect()
}

fn roundtrip(original: &[u8]) {
    let compressed = compress(original);
    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzss_roundtrip_simple() {
    roundtrip(b"TOBEORNOTTOBEORTOBEORNOT");
    roundtrip(b"Hello Hello Hello World");
}

#[test]
fn test_lzss_roundtrip_edge_sizes() {
    roundtrip(b"");
    roundtrip(b"A");
    roundtrip(b"AB");
    roundtrip(b"ABA");
}

#[test]
fn test_lzss_roundtrip_long_runs() {
    roundtrip(&vec![0u8; 10_000]);
    roundtrip(&vec![0xFFu8; 4097]);

    let mut mixed = vec![b'a'; 300];
    mixed.extend(std::iter::repeat_n(b'b', 19));
    mixed.extend(std::iter::repeat_n(b'a', 5000));
    roundtrip(&mixed);
}

#[test]
fn test_lzss_roundtrip_text() {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. \
                 How vexingly quick daft zebras jump! "
        .repeat(200);
    let compressed = compress(&text);
    assert!(compressed.len() < text.len() / 4);
    assert_eq!(decompress(&compressed).unwrap(), text);
}

#[test]
fn test_lzss_roundtrip_pseudo_random() {
    let mut data = Vec::with_capacity(20_000);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..20_000 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 56) as u8 & 0x0F);
    }
    roundtrip(&data);
}

#[test]
fn test_lzss_deterministic() {
    let data = b"abracadabra abracadabra abracadabra".repeat(50);
    assert_eq!(compress(&data), compress(&data));

    let mut encoder = LzssEncoder::new();
    let first = encoder.encode(&data);
    let second = encoder.encode(&data);
    assert_eq!(first, second);
}

#[test]
fn test_lzss_literal_fallback() {
    let ramp: Vec<u8> = (0..=255).collect();
    let compressed = compress(&ramp);

    assert_eq!(compressed.len(), ramp.len().div_ceil(8) + ramp.len());
    for (block, chunk) in compressed.chunks(9).enumerate() {
        assert_eq!(chunk[0], 0xFF, "block {block} should be all literals");
        assert_eq!(&chunk[1..], &ramp[block * 8..block * 8 + 8]);
    }
}

#[test]
fn test_lzss_partial_literal_block() {
    let compressed = compress(b"abcdefghij");
    // Second block: two literals, remaining bits unused.
    assert_eq!(compressed.len(), 1 + 8 + 1 + 2);
    assert_eq!(compressed[9], 0b1100_0000);
}

#[test]
fn test_lzss_length_two_match_is_literals() {
    let tokens = LzssEncoder::new().tokenize(b"xy--xy..");
    assert!(tokens.iter().all(LzssToken::is_literal));

    let compressed = compress(b"xy--xy..");
    assert_eq!(compressed[0], 0xFF);
}

#[test]
fn test_lzss_self_overlapping_copy() {
    let original = b"ABABABABABAB";
    let compressed = compress(original);
    assert_eq!(compressed, vec![0b1100_0000, b'A', b'B', (10 - 3) << 4, 0x01]);
    assert_eq!(decompress(&compressed).unwrap(), original);

    // Copy 4 bytes from distance 2 with only 2 bytes of history.
    let stream = [0b1100_0000, b'A', b'B', (4 - 3) << 4, 0x01];
    assert_eq!(decompress(&stream).unwrap(), b"ABABAB");
}

#[test]
fn test_lzss_max_length_at_max_distance() {
    let mut data = marker();
    data.extend(filler(LzssConfig::WINDOW_SIZE - 18));
    data.extend(marker());
    assert_eq!(data.len(), LzssConfig::WINDOW_SIZE + 18);

    let tokens = LzssEncoder::new().tokenize(&data);
    assert_eq!(
        tokens.last(),
        Some(&LzssToken::Match {
            length: 18,
            distance: 4096
        })
    );

    let compressed = compress(&data);
    assert_eq!(&compressed[compressed.len() - 2..], &[0xFF, 0xFF]);
    assert_eq!(decompress(&compressed).unwrap(), data);
}

#[test]
fn test_lzss_distance_beyond_window_not_chosen() {
    let mut data = marker();
    data.extend(filler(LzssConfig::WINDOW_SIZE - 18 + 1));
    data.extend(marker());

    let tokens = LzssEncoder::new().tokenize(&data);
    let tail = &tokens[tokens.len() - 18..];
    assert!(tail.iter().all(LzssToken::is_literal));
    assert_eq!(decompress(&compress(&data)).unwrap(), data);
}

#[test]
fn test_lzss_limits_never_exceeded() {
    let mut data = vec![0u8; 50_000];
    data.extend(filler(9000));
    data.extend(b"zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz".repeat(40));

    for token in LzssEncoder::new().tokenize(&data) {
        if let LzssToken::Match { length, distance } = token {
            assert!((3..=18).contains(&length));
            assert!((1..=4096).contains(&distance));
        }
    }
}

#[test]
fn test_lzss_ten_zeros() {
    let original = [0u8; 10];
    let compressed = compress(&original);
    assert_eq!(compressed, vec![0b1000_0000, 0x00, 0x60, 0x00]);
    assert_eq!(decompress(&compressed).unwrap(), original);
}

#[test]
fn test_lzss_tokens_replay() {
    let data = b"she sells sea shells by the sea shore".repeat(3);
    let tokens = LzssEncoder::new().tokenize(&data);
    let decoder = LzssDecoder::new(LzssConfig::DEFAULT);
    assert_eq!(decoder.decode_tokens(&tokens).unwrap(), data);
}

#[test]
fn test_lzss_stats() {
    let data = vec![b'X'; 1000];
    let (compressed, stats) = compress_with_stats(&data);
    assert_eq!(stats.input_size, 1000);
    assert_eq!(stats.output_size, compressed.len());
    assert_eq!(stats.literals, 1);
    assert_eq!(stats.matched_bytes, 999);
    assert_eq!(stats.blocks, stats.symbols().div_ceil(8));
    assert!(stats.space_savings() > 80.0);
}

#[test]
fn test_lzss_truncated_stream() {
    let compressed = compress(&b"abcabcabcabcabc".repeat(4));
    let truncated = &compressed[..compressed.len() - 1];
    assert!(matches!(
        decompress(truncated),
        Err(LzssError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_lzss_corrupt_distance() {
    // A reference 4096 back after a single literal.
    let stream = [0b1000_0000, b'A', 0x0F, 0xFF];
    match decompress(&stream) {
        Err(LzssError::InvalidDistance {
            distance,
            history_size,
            ..
        }) => {
            assert_eq!(distance, 4096);
            assert_eq!(history_size, 1);
        }
        other => panic!("expected InvalidDistance, got {other:?}"),
    }
}

#[test]
fn test_lzss_concurrent_calls() {
    let inputs: Vec<Vec<u8>> = (0..8u8)
        .map(|seed| {
            (0..5000u32)
                .map(|k| ((k * (seed as u32 + 1)) % 37) as u8)
                .collect()
        })
        .collect();

    std::thread::scope(|scope| {
        for input in &inputs {
            scope.spawn(move || {
                let compressed = compress(input);
                assert_eq!(&decompress(&compressed).unwrap(), input);
            });
        }
    });
}
