//! List command implementation

use crate::cli::Cli;
use crate::cli::print_usage;
use crate::error::convert_inspection_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use arinspect_core::InspectionError;
use arinspect_core::list_archive;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    // The header row does not depend on the archive
    if cli.header {
        formatter.format_header()?;
    }

    let Some(archive) = cli.archive.as_deref() else {
        if !cli.header {
            print_usage();
        }
        return Ok(());
    };

    let config = cli.scan_config();
    log::debug!("scanning {} with {config:?}", archive.display());

    let inventory = match list_archive(archive, &config) {
        Ok(inventory) => inventory,
        Err(InspectionError::Open { source, .. }) if cli.header => {
            log::debug!("header-only run, ignoring open failure: {source}");
            return Ok(());
        }
        Err(err) => return Err(convert_inspection_error(err, archive)),
    };

    formatter.format_inventory(archive, &inventory, cli.tail_padding)
}
