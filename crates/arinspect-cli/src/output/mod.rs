//! Output formatting module.

mod csv;
mod formatter;
mod json;

pub use formatter::OutputFormatter;

use csv::CsvFormatter;
use json::JsonFormatter;

/// Creates an output formatter based on CLI flags
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(CsvFormatter::new())
    }
}
