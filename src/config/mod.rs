use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_session_file() -> String {
    Config::session_file_path().to_string_lossy().to_string()
}
fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            session_file: default_session_file(),
            admin_password: default_admin_password(),
            api_key: None,
            model: default_model(),
            api_base_url: default_api_base_url(),
            latitude: None,
            longitude: None,
            address: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rainlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rainlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rainlog.conf")
    }

    /// Return the full path of the SQLite database holding the records
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rainlog.sqlite")
    }

    /// The admin marker lives in the temp dir so it does not survive a reboot.
    pub fn session_file_path() -> PathBuf {
        env::temp_dir().join("rainlog").join("session.sqlite")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// API key from the config file, falling back to `GEMINI_API_KEY` / `API_KEY`.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env::var("GEMINI_API_KEY").ok())
            .or_else(|| env::var("API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();
        assert_eq!(cfg.admin_password, DEFAULT_ADMIN_PASSWORD);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert!(cfg.latitude.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainlog.conf");
        fs::write(&path, "database: /tmp/rain.sqlite\nlatitude: 40.4\nlongitude: -3.7\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/rain.sqlite");
        assert_eq!(cfg.latitude, Some(40.4));
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn database_key_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainlog.conf");
        fs::write(&path, "admin_password: s3cret\nmodel: other-model\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, Config::default().database);
        assert_eq!(cfg.admin_password, "s3cret");
        assert_eq!(cfg.model, "other-model");
    }

    #[test]
    fn garbage_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rainlog.conf");
        fs::write(&path, "database: [unclosed").unwrap();

        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
