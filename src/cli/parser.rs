use clap::{Parser, Subcommand};

/// Command-line interface definition for rainlog
/// CLI application to log rainfall measurements
#[derive(Parser)]
#[command(
    name = "rainlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small rainfall logbook: record measurements, view a dashboard and ask an AI for insights",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the admin session file
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    /// Show debug diagnostics
    #[arg(global = true, short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(global = true, short, long)]
    pub quiet: bool,

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

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Open an admin session
    Login {
        /// Admin password (prompted when omitted)
        password: Option<String>,
    },

    /// Close the admin session
    Logout,

    /// Print the current role (admin or public)
    Whoami,

    /// Record a new measurement (admin only)
    Add {
        /// Date of the measurement (YYYY-MM-DD or "today")
        date: String,

        /// Precipitation in millimeters
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,

        #[arg(long, value_name = "FILE|URL", help = "Photo: local image file (embedded) or URL")]
        image: Option<String>,

        #[arg(long, allow_negative_numbers = true, requires = "lng", help = "Latitude")]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "lat", help = "Longitude")]
        lng: Option<f64>,

        #[arg(long, help = "Human-readable address")]
        address: Option<String>,
    },

    /// Replace fields of an existing measurement (admin only)
    Edit {
        /// Record id (see `rainlog list`)
        id: String,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, allow_negative_numbers = true, help = "New amount in millimeters")]
        amount: Option<f64>,

        #[arg(long, conflicts_with = "clear_notes", help = "New notes")]
        notes: Option<String>,

        #[arg(long = "clear-notes", help = "Remove the notes")]
        clear_notes: bool,

        #[arg(long, value_name = "FILE|URL", conflicts_with = "clear_image", help = "New photo")]
        image: Option<String>,

        #[arg(long = "clear-image", help = "Remove the photo")]
        clear_image: bool,

        #[arg(long, allow_negative_numbers = true, requires = "lng", help = "Latitude")]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "lat", help = "Longitude")]
        lng: Option<f64>,

        #[arg(long, help = "Human-readable address")]
        address: Option<String>,
    },

    /// Delete a measurement by id (admin only)
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List measurements, newest first
    List,

    /// Dashboard: totals, averages and the trend chart
    Stats {
        #[arg(long, help = "Ask the AI for a quick tip about the latest measurement")]
        tip: bool,
    },

    /// Ask the AI service for an analysis of the recorded rainfall
    Insights,
}
