//! Sequential member reader.

use std::io::ErrorKind;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use crate::Alignment;
use crate::InspectionError;
use crate::Result;
use crate::ScanConfig;
use crate::formats::HEADER_LEN;
use crate::formats::MAGIC;
use crate::formats::MAGIC_LEN;
use crate::formats::MemberHeader;
use crate::hash::digest_member;
use crate::inspection::inventory::ArchiveInventory;
use crate::inspection::member::MemberRecord;

/// Reads archive members one header at a time.
///
/// Construction validates the global signature. Each call to
/// [`next_member`](Self::next_member) decodes one header, hashes the
/// payload that follows it and moves past that payload. Reading stops
/// cleanly once less than a full header remains.
///
/// # Examples
///
/// ```
/// use arinspect_core::ArchiveReader;
/// use arinspect_core::ScanConfig;
/// use arinspect_core::test_utils::ArTestBuilder;
/// use std::io::Cursor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = ArTestBuilder::new().add_file("a.txt", b"hello!").build();
/// let mut reader = ArchiveReader::new(Cursor::new(data), &ScanConfig::default())?;
///
/// while let Some(member) = reader.next_member()? {
///     println!("{} {}", member.name, member.md5);
/// }
/// assert_eq!(reader.trailing_bytes(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArchiveReader<R> {
    source: R,
    config: ScanConfig,
    len: u64,
    trailing_bytes: u64,
    finished: bool,
}

impl<R: Read + Seek> ArchiveReader<R> {
    /// Creates a reader over `source`, checking the signature at offset 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMagic` if fewer than 8 bytes can be read or they do
    /// not match `!<arch>\n`, and `Io` if the source cannot be sought.
    pub fn new(mut source: R, config: &ScanConfig) -> Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;

        let mut magic = [0u8; MAGIC_LEN];
        let read = read_full(&mut source, &mut magic)?;
        if read != MAGIC_LEN || &magic != MAGIC {
            return Err(InspectionError::InvalidMagic);
        }
        log::trace!("archive signature ok, {len} bytes total");

        Ok(Self {
            source,
            config: config.clone(),
            len,
            trailing_bytes: 0,
            finished: false,
        })
    }

    /// Reads the next member.
    ///
    /// Returns `Ok(None)` at end of archive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` for undecodable headers, `Truncated` if the
    /// declared size runs past end of file (checked before any buffer is
    /// allocated), and `Resource` if the payload cannot be buffered.
    pub fn next_member(&mut self) -> Result<Option<MemberRecord>> {
        if self.finished {
            return Ok(None);
        }

        let mut raw = [0u8; HEADER_LEN];
        let read = read_full(&mut self.source, &mut raw)?;
        if read < HEADER_LEN {
            log::trace!("{read} bytes left after last header, stopping");
            self.finished = true;
            return Ok(None);
        }

        let header = MemberHeader::parse(&raw, &self.config)?;
        let remaining = self.len.saturating_sub(self.source.stream_position()?);
        if header.size > remaining {
            return Err(InspectionError::Truncated {
                expected: header.size,
                actual: remaining,
            });
        }

        let md5 = digest_member(&mut self.source, header.size, &self.config)?;
        self.skip_payload(header.size)?;
        self.trailing_bytes = self.len.saturating_sub(self.source.stream_position()?);

        log::debug!(
            "member {:?}: {} bytes, md5 {md5}",
            header.name,
            header.size
        );

        Ok(Some(MemberRecord::new(header, md5)))
    }

    /// Reads all remaining members in archive order.
    ///
    /// # Errors
    ///
    /// Fails on the first member that cannot be read; no partial inventory is
    /// returned.
    pub fn read_members(mut self) -> Result<ArchiveInventory> {
        let mut inventory = ArchiveInventory::new();
        while let Some(member) = self.next_member()? {
            inventory.add_member(member);
        }
        inventory.trailing_bytes = self.trailing_bytes;
        Ok(inventory)
    }

    /// Returns the bytes remaining after the last member read so far.
    ///
    /// Stays 0 until a member has been read, whatever follows the signature.
    #[must_use]
    pub const fn trailing_bytes(&self) -> u64 {
        self.trailing_bytes
    }

    /// Returns the total length of the source.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the source is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn skip_payload(&mut self, size: u64) -> Result<()> {
        let offset = i64::try_from(size).map_err(|_| {
            InspectionError::InvalidHeader(format!("member size {size} is out of range"))
        })?;
        let position = self.source.seek(SeekFrom::Current(offset))?;

        if self.config.alignment == Alignment::Even && size % 2 == 1 && position < self.len {
            self.source.seek(SeekFrom::Current(1))?;
            log::debug!("skipped alignment byte at offset {position}");
        }
        Ok(())
    }
}

impl<R: Read + Seek> Iterator for ArchiveReader<R> {
    type Item = Result<MemberRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_member() {
            Ok(member) => member.map(Ok),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
