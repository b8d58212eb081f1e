//! On-disk layout of Unix `ar` archives.
//!
//! Only the common format is understood: an 8-byte global signature
//! followed by 60-byte member headers, each immediately followed by the
//! member payload. GNU and BSD long-name extensions are reported verbatim
//! rather than resolved.

pub mod field;
pub mod header;

// Re-export main types for convenience
pub use header::HEADER_LEN;
pub use header::HEADER_TERMINATOR;
pub use header::MAGIC;
pub use header::MAGIC_LEN;
pub use header::MemberHeader;
