use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_COLLEGE_NAME: &str = "College Management System";
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_college_name")]
    pub college_name: String,

    /// Simulated verification delay for the demo sign-in, in milliseconds.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_college_name() -> String {
    DEFAULT_COLLEGE_NAME.to_string()
}

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            college_name: default_college_name(),
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl Config {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

/// Load the config file, falling back to defaults when it is absent or
/// malformed. An explicit path (from `--config`) wins over the lookup chain.
pub fn load_with(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return Config::default(),
        },
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CAMPUS_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("campus").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("campus").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "campus", "campus")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("campus"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("campus"));
    }
    directories::ProjectDirs::from("io", "campus", "campus")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_file_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("campus.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.college_name, DEFAULT_COLLEGE_NAME);
        assert_eq!(config.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
        assert_eq!(config.login_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn file_values_override_defaults() {
        let config: Config = toml::from_str(
            "college_name = \"Northfield College\"\nlogin_delay_ms = 150\n",
        )
        .unwrap();
        assert_eq!(config.college_name, "Northfield College");
        assert_eq!(config.login_delay(), Duration::from_millis(150));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_with(Some(Path::new("/nonexistent/campus.toml")));
        assert_eq!(config.college_name, DEFAULT_COLLEGE_NAME);
    }
}
