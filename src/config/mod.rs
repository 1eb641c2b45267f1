use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_driver_name")]
    pub driver_name: String,
    #[serde(default = "default_graph_width")]
    pub graph_width: f64,
    #[serde(default = "default_max_drive_hours")]
    pub max_drive_hours: f64,
    #[serde(default = "default_fuel_stop_interval")]
    pub fuel_stop_interval_miles: i64,
}

fn default_driver_name() -> String {
    "John Doe".to_string()
}
fn default_graph_width() -> f64 {
    520.0
}
fn default_max_drive_hours() -> f64 {
    11.0
}
fn default_fuel_stop_interval() -> i64 {
    1000
}

/// Keys a complete config file is expected to carry; `config --check`
/// reports the missing ones.
const EXPECTED_KEYS: [&str; 5] = [
    "database",
    "driver_name",
    "graph_width",
    "max_drive_hours",
    "fuel_stop_interval_miles",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            driver_name: default_driver_name(),
            graph_width: default_graph_width(),
            max_drive_hours: default_max_drive_hours(),
            fuel_stop_interval_miles: default_fuel_stop_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("roadlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".roadlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("roadlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("roadlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Names of expected keys missing from the config file on disk.
    /// Missing keys are not fatal (serde fills the defaults), but the
    /// user may want to pin them explicitly.
    pub fn missing_keys() -> Vec<&'static str> {
        let path = Self::config_file();
        let Ok(content) = fs::read_to_string(&path) else {
            return EXPECTED_KEYS.to_vec();
        };
        let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(&content) else {
            return EXPECTED_KEYS.to_vec();
        };

        EXPECTED_KEYS
            .iter()
            .filter(|k| value.get(**k).is_none())
            .copied()
            .collect()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
