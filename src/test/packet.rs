use crate::dccp::{
    DccpPacket, DecodeError, DecodeOptions, ExtensionHeader, PacketType, SequenceNumber, Stage,
};
use crate::samples;

/// X=0 Ack: 12-byte generic header + 4-byte ack subheader.
fn short_ack() -> Vec<u8> {
    vec![
        0x00, 0x01, 0x00, 0x02, 0x04, 0x21, 0xbe, 0xef, 0x06, 0x12, 0x34, 0x56, 0x00, 0xab,
        0xcd, 0xef,
    ]
}

#[test]
fn request_sample_decodes_end_to_end() {
    let pkt = DccpPacket::decode(samples::REQUEST).expect("decode");
    assert_eq!(pkt.source_port(), 55697);
    assert_eq!(pkt.dest_port(), 5201);
    assert_eq!(pkt.ccval(), 0);
    assert_eq!(pkt.cscov(), 0);
    assert_eq!(pkt.checksum(), 0xE8FB);
    assert_eq!(pkt.packet_type(), PacketType::Request);
    assert!(pkt.extended_seq_flag());
    assert_eq!(pkt.sequence_number(), 0x5f34_7b1c_282c);
    assert_eq!(pkt.code(), Some(0));
    assert_eq!(pkt.ack_number(), None);
    assert_eq!(pkt.header_len, 17);
    assert_eq!(pkt.trailing.len(), samples::REQUEST.len() - 17);
}

#[test]
fn client_request_sample_decodes_integer_sequence() {
    let pkt = DccpPacket::decode(samples::CLIENT_REQUEST).expect("decode");
    assert_eq!(pkt.source_port(), 36921);
    assert_eq!(pkt.dest_port(), 5201);
    assert_eq!(pkt.checksum(), 0xF9D2);
    assert_eq!(pkt.packet_type(), PacketType::Request);
    assert!(pkt.extended_seq_flag());
    assert_eq!(pkt.sequence_number(), 185_948_641_247_353);
    assert_eq!(pkt.code(), Some(0));
}

#[test]
fn server_ack_sample_decodes_ack_number() {
    let pkt = DccpPacket::decode(samples::SERVER_ACK).expect("decode");
    assert_eq!(pkt.source_port(), 5201);
    assert_eq!(pkt.dest_port(), 36921);
    assert_eq!(pkt.checksum(), 0x67F4);
    assert_eq!(pkt.packet_type(), PacketType::Ack);
    assert_eq!(pkt.sequence_number(), 0xcde3_eadf_6dcf);
    assert_eq!(pkt.ack_number(), Some(185_948_641_247_354));
    assert_eq!(pkt.header_len, samples::SERVER_ACK.len());
    assert_eq!(pkt.header_len, pkt.declared_header_len());
    assert!(pkt.trailing.is_empty());
}

#[test]
fn short_form_ack_decodes_24_bit_fields() {
    let pkt = DccpPacket::decode(&short_ack()).expect("decode");
    assert_eq!(pkt.ccval(), 2);
    assert_eq!(pkt.cscov(), 1);
    assert_eq!(pkt.checksum(), 0xbeef);
    assert!(!pkt.extended_seq_flag());
    assert_eq!(pkt.sequence, SequenceNumber::Short(0x12_3456));
    assert_eq!(
        pkt.extension,
        ExtensionHeader::Ack {
            ack_number: SequenceNumber::Short(0xab_cdef)
        }
    );
    assert_eq!(pkt.header_len, 16);
}

#[test]
fn data_packet_keeps_remainder_unparsed() {
    let mut buf = short_ack();
    // Type=Data, X=0
    buf[8] = 0x04;
    let pkt = DccpPacket::decode(&buf).expect("decode");
    assert_eq!(pkt.packet_type(), PacketType::Data);
    assert_eq!(pkt.raw_bytes(), Some(&buf[12..]));
    assert_eq!(pkt.code(), None);
    assert_eq!(pkt.header_len, 12);
    assert!(pkt.trailing.is_empty());
}

/// X=1 Data: 16-byte generic header (data_offset=4) + 8-byte payload.
fn extended_data_with_payload() -> Vec<u8> {
    vec![
        0x00, 0x01, 0x00, 0x02, 0x04, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01, 0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe, 0xba, 0xbe,
    ]
}

#[test]
fn data_payload_is_not_counted_as_header() {
    let buf = extended_data_with_payload();
    let strict = DecodeOptions {
        strict_offset: true,
    };
    let pkt = DccpPacket::decode_with(&buf, &strict).expect("payload is not header");
    assert_eq!(pkt.header_len, 16);
    assert_eq!(pkt.declared_header_len(), 16);
    assert_eq!(pkt.raw_bytes(), Some(&buf[16..]));
}

#[test]
fn strict_offset_rejects_data_header_longer_than_declared() {
    let mut buf = extended_data_with_payload();
    buf[4] = 0x03;
    let strict = DecodeOptions {
        strict_offset: true,
    };
    let err = DccpPacket::decode_with(&buf, &strict).expect_err("12 < 16");
    assert_eq!(
        err,
        DecodeError::DataOffsetTooSmall {
            declared: 12,
            consumed: 16
        }
    );
}

#[test]
fn strict_offset_accepts_request_with_trailing_options() {
    let strict = DecodeOptions {
        strict_offset: true,
    };
    let pkt = DccpPacket::decode_with(samples::REQUEST, &strict).expect("options fit");
    assert_eq!(pkt.header_len, 17);
    assert_eq!(pkt.declared_header_len(), samples::REQUEST.len());
    assert_eq!(pkt.trailing, &samples::REQUEST[17..]);
}

#[test]
fn short_form_request_skips_reserved_byte_before_code() {
    let buf = [
        0x00, 0x01, 0x00, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00, 0x12, 0x34, 0x56, 0xee, 0x2a,
    ];
    let pkt = DccpPacket::decode(&buf).expect("decode");
    assert_eq!(pkt.packet_type(), PacketType::Request);
    assert_eq!(pkt.sequence, SequenceNumber::Short(0x12_3456));
    assert_eq!(pkt.code(), Some(0x2a));
    assert_eq!(pkt.header_len, 14);

    let err = DccpPacket::decode(&buf[..13]).expect_err("no code byte");
    assert_eq!(err.stage(), Stage::Extension);
}

#[test]
fn decoding_twice_gives_identical_records() {
    for sample in [samples::REQUEST, samples::CLIENT_REQUEST, samples::SERVER_ACK] {
        let a = DccpPacket::decode(sample).expect("first");
        let b = DccpPacket::decode(sample).expect("second");
        assert_eq!(a, b);
    }
}

#[test]
fn every_truncation_of_ack_fails_at_the_right_stage() {
    let full = samples::SERVER_ACK;
    for len in 0..full.len() {
        let err = DccpPacket::decode(&full[..len]).expect_err("truncated");
        let want = match len {
            0..=11 => Stage::Header,
            12..=15 => Stage::Sequence,
            _ => Stage::Extension,
        };
        assert_eq!(err.stage(), want, "len={len}");
    }
}

#[test]
fn data_offset_too_small_warns_by_default_and_fails_when_strict() {
    let mut buf = samples::SERVER_ACK.to_vec();
    buf[4] = 0x05;

    let pkt = DccpPacket::decode(&buf).expect("lenient");
    assert_eq!(pkt.declared_header_len(), 20);

    let strict = DecodeOptions {
        strict_offset: true,
    };
    let err = DccpPacket::decode_with(&buf, &strict).expect_err("strict");
    assert_eq!(
        err,
        DecodeError::DataOffsetTooSmall {
            declared: 20,
            consumed: 24
        }
    );
    assert_eq!(err.stage(), Stage::Offset);
    assert!(DccpPacket::decode_with(samples::SERVER_ACK, &strict).is_ok());
}

#[test]
fn error_message_names_stage_and_byte_counts() {
    let err = DccpPacket::decode(&samples::REQUEST[..14]).expect_err("truncated");
    assert_eq!(
        err.to_string(),
        "truncated sequence number: need 7 bytes at offset 9, have 5"
    );
}

#[test]
fn packet_serializes_with_tagged_extension() {
    let pkt = DccpPacket::decode(samples::SERVER_ACK).expect("decode");
    let v = serde_json::to_value(&pkt).expect("to json");
    assert_eq!(v["header"]["packet_type"], "ack");
    assert_eq!(v["extension"]["kind"], "ack");
    assert_eq!(v["extension"]["ack_number"]["form"], "extended");
    assert_eq!(v["extension"]["ack_number"]["value"], 185_948_641_247_354u64);

    let back: DccpPacket = serde_json::from_value(v).expect("from json");
    assert_eq!(back, pkt);
}

#[test]
fn reserved_packet_type_only_deserializes_reserved_codes() {
    let ok: PacketType = serde_json::from_value(serde_json::json!({ "reserved": 12 }))
        .expect("12 is reserved");
    assert_eq!(ok, PacketType::Reserved(12));
    assert_eq!(ok, PacketType::from_code(12));

    let ack: PacketType = serde_json::from_value(serde_json::json!("ack")).expect("ack");
    assert_eq!(ack, PacketType::Ack);

    assert!(serde_json::from_value::<PacketType>(serde_json::json!({ "reserved": 3 })).is_err());
    assert!(serde_json::from_value::<PacketType>(serde_json::json!({ "reserved": 16 })).is_err());
}
