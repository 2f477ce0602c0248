use clap::Parser;
use ooo_calendar::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("OOO Calendar - Paylocity Time-Off Report Converter");
    println!("==================================================");
    println!();
    println!("Convert the newest Paylocity time-off report into an iCalendar file");
    println!("with one all-day out-of-office event per leave request.");
    println!();
    println!("USAGE:");
    println!("    ooo-calendar <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert the newest report into an iCalendar file (main command)");
    println!("    inspect     Print the records and errors found in a report");
    println!("    list        List available reports and show which one is newest");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch the newest report over SFTP (password from PAYLOCITY_PASSWORD):");
    println!("    ooo-calendar convert --server ftp.paylocity.com -u truss -o output.ics");
    println!();
    println!("    # Convert a local report, dropping rows with unknown labels:");
    println!("    ooo-calendar convert -i Time_Off_Requests_20211012.csv --skip-invalid");
    println!();
    println!("    # Check which report in a directory would be converted:");
    println!("    ooo-calendar list --source-dir ./reports");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ooo-calendar <COMMAND> --help");
}
