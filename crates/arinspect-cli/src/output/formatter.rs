//! Output formatter trait for CLI results.

use anyhow::Result;
use arinspect_core::ArchiveInventory;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the column header row
    fn format_header(&self) -> Result<()>;

    /// Format every member of an archive, optionally followed by the
    /// trailing byte count
    fn format_inventory(
        &self,
        archive: &Path,
        inventory: &ArchiveInventory,
        show_trailing: bool,
    ) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
