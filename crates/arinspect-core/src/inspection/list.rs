//! Archive listing entry point.

use std::path::Path;

use crate::Result;
use crate::ScanConfig;
use crate::inspection::handle::ArchiveHandle;
use crate::inspection::inventory::ArchiveInventory;

/// Lists every member of the archive at `archive_path`.
///
/// Opens the file, validates the signature, then reads, hashes and skips
/// each member in a single forward pass. Nothing is written to disk.
///
/// # Errors
///
/// Returns error if:
/// - `archive_path` is a symlink or cannot be opened
/// - the file does not start with the `!<arch>\n` signature
/// - a member header declares more bytes than the file holds
/// - a member payload cannot be buffered for hashing
///
/// # Examples
///
/// ```no_run
/// use arinspect_core::ScanConfig;
/// use arinspect_core::list_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let inventory = list_archive("libfoo.a", &ScanConfig::default())?;
///
/// for member in &inventory.members {
///     println!("{}: {} bytes, md5 {}", member.name, member.size, member.md5);
/// }
/// println!("{} trailing bytes", inventory.trailing_bytes);
/// # Ok(())
/// # }
/// ```
pub fn list_archive<P: AsRef<Path>>(
    archive_path: P,
    config: &ScanConfig,
) -> Result<ArchiveInventory> {
    let handle = ArchiveHandle::open(archive_path)?;
    let path = handle.path().to_path_buf();
    let inventory = handle.into_reader(config)?.read_members()?;

    log::debug!(
        "{}: {} members, {} trailing bytes",
        path.display(),
        inventory.total_members(),
        inventory.trailing_bytes
    );

    Ok(inventory)
}
