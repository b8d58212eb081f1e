//! Member payload hashing.

use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use crate::InspectionError;
use crate::Result;
use crate::ScanConfig;
use crate::types::Md5Digest;

/// Computes the MD5 digest of the next `length` bytes of `source`.
///
/// The payload is buffered in full, hashed, and the buffer dropped before
/// returning. On success the read position of `source` is restored to where
/// it was before the call, so the caller alone decides how far to advance.
///
/// # Errors
///
/// Returns:
/// - `Resource` if `length` exceeds `config.max_member_size` or the payload
///   buffer cannot be allocated. Callers that know the source length should
///   reject oversized claims first, as [`ArchiveReader`](crate::ArchiveReader)
///   does.
/// - `Truncated` if fewer than `length` bytes remain in `source`
/// - `Io` if reading or seeking fails
///
/// # Examples
///
/// ```
/// use arinspect_core::ScanConfig;
/// use arinspect_core::digest_member;
/// use std::io::Cursor;
/// use std::io::Seek;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut source = Cursor::new(b"xxhello world".to_vec());
/// source.set_position(2);
///
/// let digest = digest_member(&mut source, 11, &ScanConfig::default())?;
/// assert_eq!(digest.to_string(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
/// assert_eq!(source.stream_position()?, 2);
/// # Ok(())
/// # }
/// ```
pub fn digest_member<R: Read + Seek>(
    source: &mut R,
    length: u64,
    config: &ScanConfig,
) -> Result<Md5Digest> {
    if length > config.max_member_size {
        return Err(InspectionError::Resource(format!(
            "member of {length} bytes exceeds the {} byte buffer limit",
            config.max_member_size
        )));
    }

    let capacity = usize::try_from(length).map_err(|_| {
        InspectionError::Resource(format!("member of {length} bytes is not addressable"))
    })?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity).map_err(|e| {
        InspectionError::Resource(format!("cannot allocate {length} byte data buffer: {e}"))
    })?;

    let start = source.stream_position()?;
    let read = source.by_ref().take(length).read_to_end(&mut buffer)? as u64;
    if read < length {
        return Err(InspectionError::Truncated {
            expected: length,
            actual: read,
        });
    }

    let digest = Md5Digest::of(&buffer);
    drop(buffer);

    source.seek(SeekFrom::Start(start))?;
    Ok(digest)
}
