//! Archive inspection without extraction.
//!
//! # Examples
//!
//! ```no_run
//! use arinspect_core::ScanConfig;
//! use arinspect_core::list_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inventory = list_archive("package.deb", &ScanConfig::default())?;
//! println!("Archive contains {} members", inventory.total_members());
//! # Ok(())
//! # }
//! ```

pub mod handle;
pub mod inventory;
pub mod list;
pub mod member;
pub mod reader;

pub use handle::ArchiveHandle;
pub use inventory::ArchiveInventory;
pub use list::list_archive;
pub use member::MemberRecord;
pub use reader::ArchiveReader;
