use crate::export::ExportFormat;
use crate::models::Locale;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTable
/// CLI application for restaurant opening hours and reservations
#[derive(Parser)]
#[command(
    name = "rtable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Restaurant opening hours, reservation slots and bookings from the command line",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Evaluate as if the restaurant clock read this time (YYYY-MM-DD HH:MM)
    #[arg(global = true, long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,

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

    /// Show whether the restaurant is open right now
    Status {
        #[arg(long, value_enum, help = "Message language (defaults to config)")]
        locale: Option<Locale>,
    },

    /// Print the weekly opening hours
    Hours {
        #[arg(long, value_enum, help = "Weekday language (defaults to config)")]
        locale: Option<Locale>,
    },

    /// List bookable reservation slots for a date
    Slots {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long, value_enum, help = "Weekday language (defaults to config)")]
        locale: Option<Locale>,
    },

    /// Check whether a date (and optionally a time) can be booked
    Check {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Time (HH:MM)
        time: Option<String>,
    },

    /// Book a table
    Reserve {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Slot start (HH:MM)
        time: String,

        #[arg(long = "party", short = 'p', help = "Number of guests")]
        party: u32,

        #[arg(long = "name", short = 'n', help = "Name on the reservation")]
        name: String,

        #[arg(long = "email", help = "Contact email")]
        email: Option<String>,

        #[arg(long = "phone", help = "Contact phone number")]
        phone: Option<String>,

        #[arg(long = "notes", help = "Free-text notes (allergies, high chair, ...)")]
        notes: Option<String>,
    },

    /// List reservations
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day, a custom range (A:B) or 'all' (default: today onwards)"
        )]
        period: Option<String>,

        #[arg(long = "cancelled", help = "Include cancelled reservations")]
        cancelled: bool,
    },

    /// Cancel a reservation by id
    Cancel {
        /// Reservation id
        id: i64,
    },

    /// Export reservations
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

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Create a backup copy of the store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the store (migrations, integrity checks, info)
    Db {
        #[arg(long = "migrate", help = "Run pending migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
