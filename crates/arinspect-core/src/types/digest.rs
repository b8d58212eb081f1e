//! MD5 content digest.

use std::fmt;

use md5::Digest;
use md5::Md5;
use serde::Serialize;
use serde::Serializer;

/// A 16-byte MD5 digest of a member payload.
///
/// Displays and serializes as 32 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use arinspect_core::Md5Digest;
///
/// let digest = Md5Digest::of(b"");
/// assert_eq!(digest.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5Digest([u8; Self::LEN]);

impl Md5Digest {
    /// Digest length in bytes.
    pub const LEN: usize = 16;

    /// Computes the digest of `bytes`.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        let mut out = [0u8; Self::LEN];
        out.copy_from_slice(&Md5::digest(bytes));
        Self(out)
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Returns the digest as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; Md5Digest::LEN]> for Md5Digest {
    fn from(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5Digest({self})")
    }
}

impl Serialize for Md5Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let digest = Md5Digest::of(b"hello world");
        assert_eq!(digest.to_hex(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let digest = Md5Digest::from([0xAB; Md5Digest::LEN]);
        let shown = digest.to_string();
        assert_eq!(shown.len(), 32);
        assert_eq!(shown, "ab".repeat(16));
    }

    #[test]
    fn test_debug_includes_hex() {
        let digest = Md5Digest::of(b"");
        assert_eq!(
            format!("{digest:?}"),
            "Md5Digest(d41d8cd98f00b204e9800998ecf8427e)"
        );
    }

    #[test]
    fn test_deterministic_and_distinct() {
        assert_eq!(Md5Digest::of(b"data one"), Md5Digest::of(b"data one"));
        assert_ne!(Md5Digest::of(b"data one"), Md5Digest::of(b"data two"));
    }
}
