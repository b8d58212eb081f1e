//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use arinspect_core::ArchiveInventory;
use arinspect_core::MemberRecord;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Serialize)]
struct InventoryOutput<'a> {
    file: String,
    total_members: usize,
    total_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    trailing_bytes: Option<u64>,
    members: &'a [MemberRecord],
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_header(&self) -> Result<()> {
        Ok(())
    }

    fn format_inventory(
        &self,
        archive: &Path,
        inventory: &ArchiveInventory,
        show_trailing: bool,
    ) -> Result<()> {
        let data = InventoryOutput {
            file: archive.display().to_string(),
            total_members: inventory.total_members(),
            total_size: inventory.total_payload_size(),
            trailing_bytes: show_trailing.then_some(inventory.trailing_bytes),
            members: &inventory.members,
        };

        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_output_structure() {
        let inventory = ArchiveInventory::new();
        let data = InventoryOutput {
            file: "lib.a".to_string(),
            total_members: 0,
            total_size: 0,
            trailing_bytes: None,
            members: &inventory.members,
        };

        let json = serde_json::to_value(JsonOutput::success("list", data)).unwrap();
        assert_eq!(json["operation"], "list");
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["file"], "lib.a");
        assert!(json["data"]["members"].as_array().unwrap().is_empty());
        assert!(json["data"].get("trailing_bytes").is_none());
    }
}
