use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Worker threads for processors that can run in parallel.
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Read buffer size in bytes.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_threads() -> usize {
    1
}

fn default_buffer_capacity() -> usize {
    1024 * 1024
}

fn default_show_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            buffer_capacity: default_buffer_capacity(),
            show_progress: default_show_progress(),
        }
    }
}

impl Config {
    /// Location of `config.toml` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "nt-tools", "nt-tools")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load the user config, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        let Some(config_path) = Self::default_path() else {
            return Config::default();
        };
        if !config_path.exists() {
            return Config::default();
        }

        match Self::from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {:#}", config_path.display(), e);
                Config::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_take_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threads = 4").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.threads, 4);
        assert_eq!(config.buffer_capacity, default_buffer_capacity());
        assert!(config.show_progress);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threads = \"many\"").unwrap();

        assert!(Config::from_path(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_path(&dir.path().join("absent.toml")).is_err());
    }
}
