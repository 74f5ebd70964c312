//! rainlog library root.
//! Exposes the CLI parser, the high-level run() function and the
//! record store / statistics / session / insight modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod insight;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

pub const LOG_ENV: &str = "RAINLOG_LOG";

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => return cli::commands::init::handle(cli),
        Commands::Config { .. } => return cli::commands::config::handle(&cli.command, &cfg),
        _ => {}
    }

    let mut app = crate::core::App::open(cfg)?;

    match &cli.command {
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            cli::commands::auth::handle(&cli.command, &mut app)
        }
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, &mut app),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, &mut app),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, &mut app),
        Commands::List => cli::commands::list::handle(&app),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, &app).await,
        Commands::Insights => cli::commands::insights::handle(&app).await,
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> AppResult<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Other(format!("failed to initialize tracing subscriber: {e}")))
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(session) = &cli.session {
        cfg.session_file = session.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, cfg).await
}
