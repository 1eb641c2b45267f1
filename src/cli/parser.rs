use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for roadlogger
/// CLI application to plan trips and build daily driver logbooks
#[derive(Parser)]
#[command(
    name = "roadlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan truck trips and build daily driver logbook graphs backed by SQLite",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Plan a trip and generate its daily logbooks
    Plan {
        /// Current location
        current: String,

        /// Pickup location
        pickup: String,

        /// Dropoff location
        dropoff: String,

        /// Hours already used in the current duty cycle
        #[arg(long = "cycle-used", default_value_t = 0.0)]
        cycle_used: f64,

        /// First logbook date (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Route distance in miles (skip the mocked route figure)
        #[arg(long = "distance")]
        distance: Option<f64>,

        /// Base driving hours (skip the mocked route figure)
        #[arg(long = "drive-hours")]
        drive_hours: Option<f64>,

        /// Print the full trip plan as JSON instead of the summary
        #[arg(long = "json")]
        json: bool,
    },

    /// List stored logbook days
    List {
        /// Filter by year/month/day or a custom range.
        ///
        /// Supported formats:
        /// - YYYY                   (e.g. "2025")
        /// - YYYY-MM                (e.g. "2025-06")
        /// - YYYY-MM-DD             (e.g. "2025-06-18")
        /// - start:end in the same formats (e.g. "2025-06:2025-08")
        /// - all                    (entire archive, the default)
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Also print each day's entries
        #[arg(long = "entries", help = "Show every entry of each listed day")]
        entries: bool,
    },

    /// Compute the logbook graph data for a stored day
    Graph {
        /// Date (YYYY-MM-DD, default today)
        date: Option<String>,

        /// Graph width in graph-local units (default from config)
        #[arg(long = "width")]
        width: Option<f64>,

        /// Print totals, polyline points and hour marks as JSON
        #[arg(long = "json")]
        json: bool,

        /// Report entries the calculators skipped or clamped
        #[arg(long = "audit")]
        audit: bool,
    },

    /// Delete a stored logbook day
    Del {
        /// Date (YYYY-MM-DD) to delete
        date: String,
    },

    /// Export logbook entries
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

        #[arg(long, short = 'f')]
        force: bool,
    },
}
