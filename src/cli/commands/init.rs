use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Resolve the DB path the same way init_all did: a relative custom
    // name lives inside the config directory.
    let db_path = match &cli.db {
        Some(custom) => {
            let p = Path::new(custom);
            if p.is_absolute() {
                custom.clone()
            } else {
                Config::config_dir().join(p).to_string_lossy().to_string()
            }
        }
        None => Config::database_file().to_string_lossy().to_string(),
    };

    println!("⚙️  Initializing roadlogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);
    println!("🎉 roadlogger initialization completed!");
    Ok(())
}
