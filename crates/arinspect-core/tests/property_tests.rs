//! Property-based tests for the archive reader.
//!
//! These tests use proptest to generate arbitrary archives and payloads and
//! verify ordering, cursor and sanitization properties.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use arinspect_core::Alignment;
use arinspect_core::ArchiveReader;
use arinspect_core::Md5Digest;
use arinspect_core::ScanConfig;
use arinspect_core::digest_member;
use arinspect_core::formats::field::decode_decimal;
use arinspect_core::formats::field::sanitize_name;
use arinspect_core::test_utils::ArTestBuilder;
use proptest::prelude::*;
use std::io::Cursor;
use std::io::Seek;

proptest! {
    /// Every member comes back, in order, with the right digest.
    #[test]
    fn prop_members_round_trip_in_order(
        members in prop::collection::vec(
            ("[a-z][a-z0-9_.]{0,14}", prop::collection::vec(any::<u8>(), 0..64)),
            0..8
        ),
        trailing in prop::collection::vec(any::<u8>(), 0..59)
    ) {
        let builder = members.iter().fold(
            ArTestBuilder::new().even_padding(),
            |b, (name, data)| b.add_file(name, data),
        );
        let data = builder.append_raw(&trailing).build();
        let config = ScanConfig {
            alignment: Alignment::Even,
            ..Default::default()
        };

        let inventory = ArchiveReader::new(Cursor::new(data), &config)
            .unwrap()
            .read_members()
            .unwrap();

        prop_assert_eq!(inventory.total_members(), members.len());
        for (record, (name, data)) in inventory.members.iter().zip(&members) {
            prop_assert_eq!(&record.name, name);
            prop_assert_eq!(record.size, data.len() as u64);
            prop_assert_eq!(record.md5, Md5Digest::of(data));
        }
        let expected_trailing = if members.is_empty() { 0 } else { trailing.len() as u64 };
        prop_assert_eq!(inventory.trailing_bytes, expected_trailing);
    }

    /// Hashing never moves the cursor.
    #[test]
    fn prop_digest_preserves_position(
        prefix in prop::collection::vec(any::<u8>(), 0..32),
        payload in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let mut bytes = prefix.clone();
        bytes.extend_from_slice(&payload);
        let mut source = Cursor::new(bytes);
        source.set_position(prefix.len() as u64);

        let digest = digest_member(&mut source, payload.len() as u64, &ScanConfig::default())
            .unwrap();

        prop_assert_eq!(source.stream_position().unwrap(), prefix.len() as u64);
        prop_assert_eq!(digest, Md5Digest::of(&payload));
    }

    /// Commas never survive sanitization, and nothing past the first
    /// control byte does either.
    #[test]
    fn prop_sanitized_name_is_csv_safe(raw in prop::collection::vec(any::<u8>(), 0..24)) {
        let name = sanitize_name(&raw);
        prop_assert!(!name.contains(','));
        prop_assert!(name.len() <= 16);
        prop_assert!(name.bytes().all(|b| (0x20..=0x7e).contains(&b)));
    }

    /// A control byte at position k truncates the name to k characters.
    #[test]
    fn prop_control_byte_truncates(prefix in "[a-z]{0,15}", control in 0u8..0x20) {
        let mut raw = prefix.clone().into_bytes();
        raw.push(control);
        raw.resize(16, b' ');
        prop_assert_eq!(sanitize_name(&raw), prefix);
    }

    /// Space-padded decimal fields decode to their value.
    #[test]
    fn prop_padded_decimal_decodes(value in 0u64..10_000_000_000) {
        let field = format!("{value:<10}");
        prop_assert_eq!(decode_decimal("size", field.as_bytes()).unwrap(), value);
    }
}
