use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI application to record attendance punches with SQLite
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record punches, track schedule deviations and build daily reports using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override roster path (useful for tests or custom roster)
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record the next scheduled punch for an employee
    Punch {
        /// Employee code from the roster
        code: String,

        /// Punch at the given wall-clock instant instead of now
        #[arg(long = "at", value_name = "YYYY-MM-DDTHH:MM:SS", hide = true)]
        at: Option<String>,
    },

    /// Show the next expected event for an employee
    Next {
        /// Employee code from the roster
        code: String,
    },

    /// List recorded punch events
    List {
        #[arg(long, short, help = "Filter by employee code")]
        employee: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Correct a recorded punch (time and/or note)
    Edit {
        /// Punch id to correct
        id: String,

        #[arg(long, value_name = "HH:MM:SS", help = "New punch time")]
        time: Option<String>,

        #[arg(long, help = "New note text")]
        note: Option<String>,
    },

    /// Show the organized daily report
    Report {
        #[arg(long, short, help = "Filter by employee code")]
        employee: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export punch data or the daily report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(
            long,
            short = 'e',
            help = "Export the raw event log instead of the report"
        )]
        events: bool,

        #[arg(
            long,
            conflicts_with = "events",
            help = "Export the organized daily report (default)"
        )]
        report: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
