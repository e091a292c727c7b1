//! End-to-end framing scenarios: one session codec fed a mixed sequence of
//! packets, exercising every tag, the error drop path, and the counters.

use andromalius_core::{Error, PacketCodec};
use andromalius_lzo::{LzoAsym, LzoAsymConfig};

/// Compressed packet whose payload is `data`, as a literal run plus the
/// end-of-stream marker, under the given tag byte.
fn lzo_packet(tag: u8, data: &[u8]) -> Vec<u8> {
    assert!(!data.is_empty() && data.len() <= 238);
    let mut stream = Vec::with_capacity(data.len() + 4);
    stream.push((data.len() + 17) as u8);
    stream.extend_from_slice(data);
    stream.extend_from_slice(&[0x11, 0x00, 0x00]);
    if tag == 0x67 && stream.len() >= 2 {
        let last = stream.len() - 1;
        stream.swap(0, last);
    }
    let mut packet = vec![tag];
    packet.extend_from_slice(&stream);
    packet
}

#[test]
fn test_short_literal_packet() {
    let mut codec = LzoAsym::new(LzoAsymConfig::default());
    let mut packet = lzo_packet(0x66, b"Hello");
    codec.inbound(&mut packet).unwrap();
    assert_eq!(packet, b"Hello");
}

#[test]
fn test_swap_framing_fixed_bytes() {
    let mut codec = LzoAsym::new(LzoAsymConfig {
        support_swap: true,
        ..LzoAsymConfig::default()
    });
    let mut packet = vec![0x01, 0x02, 0x03, 0x04];
    codec.outbound(&mut packet, false);
    assert_eq!(packet, [0xFB, 0x04, 0x02, 0x03, 0x01]);
    codec.inbound(&mut packet).unwrap();
    assert_eq!(packet, [0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_unknown_op_then_session_continues() {
    let mut codec = LzoAsym::new(LzoAsymConfig::default());

    let mut bad = vec![0x00, 0x01, 0x02];
    assert_eq!(codec.inbound(&mut bad), Err(Error::UnknownOp { op: 0x00 }));
    assert!(bad.is_empty());

    let mut good = lzo_packet(0x66, b"still alive");
    codec.inbound(&mut good).unwrap();
    assert_eq!(good, b"still alive");

    assert_eq!(codec.metrics().error_count, 1);
    assert_eq!(codec.metrics().total_packets, 1);
}

#[test]
fn test_mixed_tag_sequence() {
    let mut codec = LzoAsym::new(LzoAsymConfig::default());

    let cases: Vec<(Vec<u8>, &[u8])> = vec![
        (vec![0xFA, 10, 20, 30], &[10, 20, 30]),
        (vec![0xFB, 3, 2, 1], &[1, 2, 3]),
        (lzo_packet(0x66, b"alpha"), b"alpha"),
        (lzo_packet(0x67, b"bravo"), b"bravo"),
    ];

    for (mut packet, expected) in cases {
        codec.inbound(&mut packet).unwrap();
        assert_eq!(packet, expected);
    }
    assert_eq!(codec.metrics().total_packets, 4);
    assert_eq!(codec.metrics().error_count, 0);
}

#[test]
fn test_corrupt_packet_does_not_poison_work_buffer() {
    let mut codec = LzoAsym::new(LzoAsymConfig::default());

    // A stream that dies mid-decode leaves partial data in the work buffer.
    let mut corrupt = vec![0x66, 22];
    corrupt.extend_from_slice(b"Hell");
    assert!(codec.inbound(&mut corrupt).is_err());
    assert!(corrupt.is_empty());

    // The next good packet must decode cleanly from the same buffer.
    let mut good = lzo_packet(0x66, b"ok");
    codec.inbound(&mut good).unwrap();
    assert_eq!(good, b"ok");
}

#[test]
fn test_codec_behind_trait_object() {
    let mut codec: Box<dyn PacketCodec> = Box::new(LzoAsym::new(LzoAsymConfig::default()));
    assert_eq!(codec.name(), "lzo-asym");

    let mut packet = vec![5, 6, 7];
    codec.outbound(&mut packet, true);
    codec.inbound(&mut packet).unwrap();
    assert_eq!(packet, [5, 6, 7]);
}

#[test]
fn test_counters_across_directions() {
    let mut codec = LzoAsym::new(LzoAsymConfig::default());

    let mut out_packet = vec![1u8; 100];
    codec.outbound(&mut out_packet, false);

    let mut in_packet = lzo_packet(0x66, &[7u8; 50]);
    let wire = in_packet.len() as u64;
    codec.inbound(&mut in_packet).unwrap();

    let m = codec.metrics();
    assert_eq!(m.total_packets, 2);
    assert_eq!(m.total_bytes_in, 100 + wire);
    assert_eq!(m.total_bytes_out, 101 + 50);
    assert!(m.summary().contains("Errors: 0"));
}
