//! Global signature and member header layout.

use std::ops::Range;

use crate::InspectionError;
use crate::Result;
use crate::ScanConfig;
use crate::formats::field::decode_decimal;
use crate::formats::field::decode_octal;
use crate::formats::field::narrow_u32;
use crate::formats::field::sanitize_name;

/// Length of the global archive signature.
pub const MAGIC_LEN: usize = 8;

/// Global archive signature.
pub const MAGIC: &[u8; MAGIC_LEN] = b"!<arch>\n";

/// Length of a member header.
pub const HEADER_LEN: usize = 60;

/// Marker closing every member header.
pub const HEADER_TERMINATOR: &[u8; 2] = b"`\n";

const NAME: Range<usize> = 0..16;
const MTIME: Range<usize> = 16..28;
const UID: Range<usize> = 28..34;
const GID: Range<usize> = 34..40;
const MODE: Range<usize> = 40..48;
const SIZE: Range<usize> = 48..58;
const TERMINATOR: Range<usize> = 58..60;

/// Typed view of one member header.
///
/// All fields are decoded up front; the raw header bytes are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberHeader {
    /// Sanitized member name.
    pub name: String,
    /// Modification time in seconds since the epoch.
    pub mtime: u64,
    /// Owner user ID.
    pub uid: u32,
    /// Owner group ID.
    pub gid: u32,
    /// File mode bits.
    pub mode: u32,
    /// Payload length in bytes.
    pub size: u64,
}

impl MemberHeader {
    /// Decodes a raw 60-byte header.
    ///
    /// The trailing `` `\n `` marker is only checked when
    /// [`ScanConfig::verify_terminator`] is set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` if a numeric field overflows its type, or if
    /// terminator verification is requested and the marker is wrong.
    pub fn parse(raw: &[u8; HEADER_LEN], config: &ScanConfig) -> Result<Self> {
        if config.verify_terminator && &raw[TERMINATOR] != HEADER_TERMINATOR {
            return Err(InspectionError::InvalidHeader(format!(
                "bad header terminator {:?}",
                String::from_utf8_lossy(&raw[TERMINATOR])
            )));
        }

        Ok(Self {
            name: sanitize_name(&raw[NAME]),
            mtime: decode_decimal("mtime", &raw[MTIME])?,
            uid: narrow_u32("uid", decode_decimal("uid", &raw[UID])?)?,
            gid: narrow_u32("gid", decode_decimal("gid", &raw[GID])?)?,
            mode: narrow_u32("mode", decode_octal("mode", &raw[MODE])?)?,
            size: decode_decimal("size", &raw[SIZE])?,
        })
    }
}
