use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeSince
/// CLI application to track "time since" counters with SQLite
#[derive(Parser)]
#[command(
    name = "rtimesince",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple \"time since\" counter CLI: reset counters and see the elapsed time, stored in SQLite",
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
    /// Initialize the database and configuration
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
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

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

    /// Reset the counter: add a new item (next id, now) or a manual one
    Add {
        /// Explicit item id (defaults to the highest id + 1)
        #[arg(long = "id", help = "Explicit item id (default: highest id + 1)")]
        id: Option<i64>,

        /// Reset instant (default: now)
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Reset instant, e.g. 2026-10-19T08:30:00+02:00 or '2026-10-19 08:30' (default: now)"
        )]
        at: Option<String>,
    },

    /// Change the timestamp of an existing item
    Edit {
        /// Item id
        id: i64,

        #[arg(long = "at", value_name = "DATETIME", help = "New instant (default: now)")]
        at: Option<String>,
    },

    /// Delete one item, or all of them
    Del {
        /// Item id to delete
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long = "all", help = "Delete ALL items")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List items, newest id first
    List,

    /// Show the time elapsed since the current item
    Since,

    /// Live elapsed-time display, refreshed periodically
    Watch {
        #[arg(
            long = "ticks",
            help = "Stop after N refreshes, the initial one included (default: run until interrupted)"
        )]
        ticks: Option<u64>,

        #[arg(long = "interval", value_name = "MS", help = "Refresh period in milliseconds")]
        interval: Option<u64>,
    },

    /// Export all items as JSON
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: stdout)")]
        file: Option<String>,

        #[arg(long, help = "Pretty-print the JSON")]
        pretty: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Import items from JSON
    Import {
        #[arg(long, value_name = "FILE", help = "Input file (default: stdin)")]
        file: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },
}
