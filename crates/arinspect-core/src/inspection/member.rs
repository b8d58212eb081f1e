//! Per-member metadata records.

use serde::Serialize;

use crate::formats::MemberHeader;
use crate::types::Md5Digest;

/// One parsed archive member.
///
/// Records are created once per header and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    /// Sanitized member name, safe to embed in a CSV field.
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
    /// MD5 digest of the payload.
    pub md5: Md5Digest,
}

impl MemberRecord {
    /// Builds a record from a decoded header and its payload digest.
    #[must_use]
    pub fn new(header: MemberHeader, md5: Md5Digest) -> Self {
        let MemberHeader {
            name,
            mtime,
            uid,
            gid,
            mode,
            size,
        } = header;
        Self {
            name,
            mtime,
            uid,
            gid,
            mode,
            size,
            md5,
        }
    }

    /// Returns the mode rendered in octal without a radix prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use arinspect_core::MemberRecord;
    /// use arinspect_core::Md5Digest;
    /// use arinspect_core::formats::MemberHeader;
    ///
    /// let header = MemberHeader {
    ///     name: "a.o/".to_string(),
    ///     mtime: 0,
    ///     uid: 0,
    ///     gid: 0,
    ///     mode: 0o755,
    ///     size: 0,
    /// };
    /// let record = MemberRecord::new(header, Md5Digest::of(b""));
    /// assert_eq!(record.mode_octal(), "755");
    /// ```
    #[must_use]
    pub fn mode_octal(&self) -> String {
        format!("{:o}", self.mode)
    }
}
