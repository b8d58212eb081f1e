//! CSV output formatter.

use super::formatter::OutputFormatter;
use anyhow::Result;
use arinspect_core::ArchiveInventory;
use arinspect_core::MemberRecord;
use console::Term;
use std::path::Path;

/// Column names, in row order.
pub const CSV_HEADER: &str = "file,object,date,uid,gid,mode,size,md5";

pub struct CsvFormatter {
    term: Term,
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn format_row(archive: &str, member: &MemberRecord) -> String {
        format!(
            "{archive},{},{},{},{},{},{},{}",
            member.name,
            member.mtime,
            member.uid,
            member.gid,
            member.mode_octal(),
            member.size,
            member.md5
        )
    }

    fn format_trailing(trailing_bytes: u64) -> String {
        format!("Tail padding: {trailing_bytes} bytes")
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_header(&self) -> Result<()> {
        self.term.write_line(CSV_HEADER)?;
        Ok(())
    }

    fn format_inventory(
        &self,
        archive: &Path,
        inventory: &ArchiveInventory,
        show_trailing: bool,
    ) -> Result<()> {
        let archive = archive.display().to_string();
        for member in &inventory.members {
            self.term.write_line(&Self::format_row(&archive, member))?;
        }
        if show_trailing {
            self.term
                .write_line(&Self::format_trailing(inventory.trailing_bytes))?;
        }
        Ok(())
    }
}
