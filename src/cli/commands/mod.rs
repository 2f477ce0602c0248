//! Command implementations for the OOO calendar CLI
//!
//! Each subcommand lives in its own module; `shared` holds the logging,
//! configuration and report-opening steps they have in common.

pub mod convert;
pub mod inspect;
pub mod list;
pub mod shared;

pub use shared::ConversionStats;

use crate::cli::args::Commands;

/// Dispatch to the subcommand handler selected on the command line
///
/// - `convert`: report to iCalendar file
/// - `inspect`: parse a report and print records and errors
/// - `list`: show available reports and the one that would be converted
pub fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Convert(convert_args) => convert::run_convert(convert_args).map(|_| ()),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).map(|_| ()),
        Commands::List(list_args) => list::run_list(list_args).map(|_| ()),
    }
}

