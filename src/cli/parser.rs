use clap::{Parser, Subcommand};

/// Command-line interface definition for timesheet
/// CLI application to keep track of worked hours with SQLite
#[derive(Parser)]
#[command(
    name = "timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A command line utility to keep track of worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file, the database and default settings
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, statistics, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List all events in the database
    List,

    /// Log work on a given date between two times
    ///
    /// The break is deducted once per date unless --excluded is used.
    /// Formats: YYYY-MM-DD, HH:MM (UTC).
    Add {
        /// Date of the work (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        from: String,

        /// End time (HH:MM)
        to: String,

        /// Do not deduct break time on this date (e.g. extra hours during the weekend)
        #[arg(long, short = 'e')]
        excluded: bool,
    },

    /// Log a date as a day off
    Off {
        /// Date of the day off (YYYY-MM-DD)
        date: String,
    },

    /// Remove an event from the database
    Delete {
        /// Event id, as shown by `list`
        id: i64,
    },

    /// Manage settings
    Setting {
        #[command(subcommand)]
        action: SettingAction,
    },

    /// Configure the required settings interactively.
    /// Replaces existing settings but not other data.
    Setup,

    /// Write a JSON export of the database to a file
    Backup {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the JSON inside a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Restore (and replace) all data from a previous backup
    Restore {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Show expected versus logged hours per year
    Summary {
        #[command(subcommand)]
        period: Option<SummaryPeriod>,
    },
}

#[derive(Subcommand)]
pub enum SettingAction {
    /// List current settings
    List,

    /// Add or update a setting
    Set { key: String, value: String },
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    /// One row per year: expected, total and difference (default)
    Year,

    /// One row per date with the hours logged that day
    Day,
}
