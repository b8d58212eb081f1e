//! Reader for Unix `ar` archives.
//!
//! `arinspect-core` walks the members of an `ar` archive (static libraries,
//! `.deb` packages) and reports each member's name, timestamp, owner,
//! mode, size and MD5 digest, without extracting anything.
//!
//! # Examples
//!
//! ```no_run
//! use arinspect_core::ScanConfig;
//! use arinspect_core::list_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inventory = list_archive("libfoo.a", &ScanConfig::default())?;
//! for member in &inventory.members {
//!     println!("{} {}", member.name, member.md5);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod formats;
pub mod hash;
pub mod inspection;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use config::Alignment;
pub use config::ScanConfig;
pub use error::InspectionError;
pub use error::Result;
pub use hash::digest_member;
pub use inspection::ArchiveHandle;
pub use inspection::ArchiveInventory;
pub use inspection::ArchiveReader;
pub use inspection::MemberRecord;
pub use inspection::list_archive;
pub use types::Md5Digest;
