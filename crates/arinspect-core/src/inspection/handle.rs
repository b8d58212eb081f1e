//! Opening archive files from disk.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::InspectionError;
use crate::Result;
use crate::ScanConfig;
use crate::inspection::reader::ArchiveReader;

/// An open archive file and its total length.
///
/// The file descriptor is released when the handle (or the reader built
/// from it) is dropped, including on error paths.
#[derive(Debug)]
pub struct ArchiveHandle {
    path: PathBuf,
    file: File,
    len: u64,
}

impl ArchiveHandle {
    /// Opens the archive at `path`.
    ///
    /// The path itself must name a regular file. Symbolic links are refused
    /// rather than followed.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedInput` if `path` is a symlink, and `Open` if it
    /// does not exist, is not a regular file, or cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let open_error = |source: io::Error| InspectionError::Open {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::symlink_metadata(path).map_err(open_error)?;
        if metadata.file_type().is_symlink() {
            return Err(InspectionError::UnsupportedInput {
                path: path.to_path_buf(),
            });
        }
        if !metadata.is_file() {
            return Err(open_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let file = File::open(path).map_err(open_error)?;
        let len = file.metadata().map_err(open_error)?.len();

        log::debug!("opened {} ({len} bytes)", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            file,
            len,
        })
    }

    /// Returns the path the archive was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the archive length in bytes.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the file is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Validates the signature and returns a reader positioned at the first
    /// member header.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMagic` if the file does not start with `!<arch>\n`.
    pub fn into_reader(self, config: &ScanConfig) -> Result<ArchiveReader<BufReader<File>>> {
        ArchiveReader::new(BufReader::new(self.file), config)
    }
}
