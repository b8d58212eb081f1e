//! CLI argument parsing using clap.

use anyhow::Result;
use arinspect_core::Alignment;
use arinspect_core::ScanConfig;
use clap::ArgAction;
use clap::CommandFactory;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

/// `-h` prints the CSV header row, so clap's short help flag is disabled and
/// help is only reachable through `--help`.
#[derive(Parser, Debug)]
#[command(name = "arinspect")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print the CSV header row
    #[arg(short = 'h')]
    pub header: bool,

    /// Report the number of bytes after the last member
    #[arg(short = 'p')]
    pub tail_padding: bool,

    /// Skip the pad byte that follows odd-sized members
    #[arg(long)]
    pub align: bool,

    /// Even alignment plus header terminator checks
    #[arg(long)]
    pub strict: bool,

    /// Largest member to hash, in bytes (suffixes K, M, G, T; default: no limit)
    #[arg(long, value_parser = parse_byte_size)]
    pub max_member_size: Option<u64>,

    /// Output results in JSON format
    #[arg(short, long, conflicts_with = "header")]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: Option<PathBuf>,
}

impl Cli {
    /// Parses arguments, handling `--help`, `--version` and bad usage.
    ///
    /// Returns `None` when nothing is left to do: help or usage text has
    /// been printed and the process should exit successfully.
    pub fn parse_or_usage() -> Result<Option<Self>> {
        match Self::try_parse() {
            Ok(cli) => Ok(Some(cli)),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    err.print()?;
                    Ok(None)
                }
                _ => {
                    print_usage();
                    Ok(None)
                }
            },
        }
    }

    /// Builds the scan configuration selected by the flags.
    pub fn scan_config(&self) -> ScanConfig {
        let base = if self.strict {
            ScanConfig::strict()
        } else {
            ScanConfig::default()
        };
        ScanConfig {
            alignment: if self.align {
                Alignment::Even
            } else {
                base.alignment
            },
            max_member_size: self.max_member_size.unwrap_or(base.max_member_size),
            ..base
        }
    }
}

/// Prints the one-line usage text to stdout.
pub fn print_usage() {
    println!("{}", Cli::command().render_usage());
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
