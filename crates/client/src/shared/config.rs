use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shared::list::SearchMode;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub import: ImportConfig,
    pub list: ListConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Name of the environment variable holding the bearer token
    pub token_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".into(),
            timeout_secs: 30,
            token_env: "PARK_ADMIN_TOKEN".into(),
        }
    }
}

impl ApiConfig {
    /// Bearer token from the configured environment variable
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    /// Server rejects larger uploads
    pub max_upload_bytes: u64,
    pub preview_rows: usize,
    /// When false, lots without a park column are created unassigned
    pub require_park_name: bool,
    /// Interval of the simulated progress bar
    pub progress_tick_ms: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 25 * 1024 * 1024,
            preview_rows: 10,
            require_park_name: false,
            progress_tick_ms: 200,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
    pub search_mode: SearchMode,
    /// Page size requested from the server for fetch-then-filter lists
    pub fetch_limit: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            search_mode: SearchMode::Server,
            fetch_limit: 10_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Optional log file, appended to
    pub file: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:3000"
timeout_secs = 30
token_env = "PARK_ADMIN_TOKEN"

[import]
max_upload_bytes = 26214400
preview_rows = 10
require_park_name = false
progress_tick_ms = 200

[list]
page_size = 25
search_mode = "server"
fetch_limit = 10000
"#;

/// Where the configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "embedded defaults"),
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. Explicit path (must exist)
/// 2. `config.toml` next to the executable
/// 3. `config.toml` in the working directory
/// 4. Embedded default config
///
/// Runs before logging is set up, so the caller logs the returned source.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        return Ok((read_config(path)?, ConfigSource::File(path.to_path_buf())));
    }

    for candidate in candidate_paths() {
        if candidate.exists() {
            let config = read_config(&candidate)?;
            return Ok((config, ConfigSource::File(candidate)));
        }
    }

    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok((config, ConfigSource::Embedded))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.import.max_upload_bytes, 25 * 1024 * 1024);
        assert_eq!(config.list.search_mode, SearchMode::Server);
        assert!(!config.import.require_park_name);
    }

    #[test]
    fn test_explicit_path_is_reported() {
        let path = std::env::temp_dir().join(format!("park-admin-{}.toml", std::process::id()));
        std::fs::write(&path, "[list]\npage_size = 50\n").unwrap();

        let (config, source) = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.list.page_size, 50);
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let path = std::env::temp_dir().join("park-admin-does-not-exist.toml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[import]\nrequire_park_name = true\n").unwrap();
        assert!(config.import.require_park_name);
        assert_eq!(config.import.preview_rows, 10);
        assert_eq!(config.list.fetch_limit, 10_000);
        assert!(config.logging.file.is_none());
    }
}
