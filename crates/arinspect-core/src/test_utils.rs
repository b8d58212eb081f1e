//! Test utilities for building `ar` archives in memory.
//!
//! These helpers write headers byte-for-byte in the common `ar` layout so
//! tests do not depend on an external `ar` tool.

use crate::formats::HEADER_TERMINATOR;
use crate::formats::MAGIC;

/// Creates an in-memory archive from a list of entries.
///
/// Each entry is a tuple of (name, content). Members get mtime 0, uid/gid 0
/// and mode 0o644, with no alignment padding.
///
/// # Examples
///
/// ```
/// use arinspect_core::test_utils::create_test_ar;
///
/// let data = create_test_ar(vec![("a.o", b"hello"), ("b.o", b"world")]);
/// assert!(data.starts_with(b"!<arch>\n"));
/// ```
#[must_use]
pub fn create_test_ar(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ArTestBuilder::new(), |builder, (name, data)| {
            builder.add_file(name, data)
        })
        .build()
}

/// Formats a 60-byte member header.
///
/// Fields wider than their slot are written as-is, which lets tests produce
/// malformed headers deliberately.
#[must_use]
pub fn format_header(name: &str, mtime: u64, uid: u32, gid: u32, mode: u32, size: u64) -> Vec<u8> {
    let mut header =
        format!("{name:<16}{mtime:<12}{uid:<6}{gid:<6}{mode:<8o}{size:<10}").into_bytes();
    header.extend_from_slice(HEADER_TERMINATOR);
    header
}

/// Builder for `ar` test archives.
///
/// # Examples
///
/// ```
/// use arinspect_core::test_utils::ArTestBuilder;
///
/// let data = ArTestBuilder::new()
///     .even_padding()
///     .add_file("odd.txt", b"abc")
///     .add_member("script", 1_700_000_000, 1000, 1000, 0o100_755, b"#!")
///     .build();
/// assert_eq!(data.len(), 8 + 60 + 4 + 60 + 2);
/// ```
#[derive(Debug, Clone)]
pub struct ArTestBuilder {
    data: Vec<u8>,
    even_padding: bool,
}

impl ArTestBuilder {
    /// Creates a builder holding only the global signature.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: MAGIC.to_vec(),
            even_padding: false,
        }
    }

    /// Pads odd-sized payloads added afterwards with a `\n`, as `ar` does.
    #[must_use]
    pub fn even_padding(mut self) -> Self {
        self.even_padding = true;
        self
    }

    /// Adds a member with default metadata.
    #[must_use]
    pub fn add_file(self, name: &str, data: &[u8]) -> Self {
        self.add_member(name, 0, 0, 0, 0o644, data)
    }

    /// Adds a member with explicit metadata.
    #[must_use]
    pub fn add_member(
        mut self,
        name: &str,
        mtime: u64,
        uid: u32,
        gid: u32,
        mode: u32,
        data: &[u8],
    ) -> Self {
        let size = data.len() as u64;
        self.data
            .extend_from_slice(&format_header(name, mtime, uid, gid, mode, size));
        self.data.extend_from_slice(data);
        if self.even_padding && size % 2 == 1 {
            self.data.push(b'\n');
        }
        self
    }

    /// Appends raw bytes, such as a hand-written header or trailing junk.
    #[must_use]
    pub fn append_raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Returns the archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

impl Default for ArTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
