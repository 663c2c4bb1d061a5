//! History and report commands.

use crate::cli::args::{HistoryArgs, OutputFormat, ReportArgs};
use crate::error::RepkitError;
use crate::history::{HistoryReport, HistoryStorage, ReportPeriod};
use crate::output::{format_history, to_json};

/// Execute the history command.
///
/// # Errors
///
/// Returns an error if the log cannot be read or formatting fails.
pub fn history(args: &HistoryArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let storage = HistoryStorage::new()?;
    let entries = storage.recent(args.limit)?;
    format_history(&entries, format)
}

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if the log cannot be read or formatting fails.
pub fn report(args: &ReportArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let storage = HistoryStorage::new()?;
    let period = ReportPeriod::parse(&args.period);
    let report = HistoryReport::generate(&storage, period)?;

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => Ok(report.format()),
    }
}
