use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, is_initialized};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database holding the records
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rainlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_str);

    let pool = DbPool::new(&db_str)?;
    if is_initialized(&pool.conn)? {
        tracing::debug!(path = %db_str, "schema already present");
        println!("✅ Database already initialized at {}", &db_str);
        return Ok(());
    }

    init_db(&pool.conn)?;
    tracing::info!(path = %db_str, "database initialized");

    println!("✅ Database initialized at {}", &db_str);
    Ok(())
}
