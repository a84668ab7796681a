//! On-disk configuration: display zone, refresh cadence, default birth date.
//!
//! Lives at the platform config directory as `config.toml`; a missing or
//! unreadable file means defaults, never an error.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the config directory, mainly for test isolation.
pub const DIR_ENV_VAR: &str = "AGE_INSIGHT_DIR";

const CONFIG_FILE: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Birth date assumed when none is given on the command line, in any
    /// format `parse_date` accepts.
    pub default_birth: String,
    pub clock: ClockConfig,
    pub log: LogConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Display name of the zone; informational only.
    pub zone_name: String,
    /// Offset from UTC in minutes, east positive (330 = UTC+05:30).
    pub utc_offset_minutes: i32,
    /// Watch-mode redraw cadence.
    pub refresh_interval_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Write diagnostics to a log file next to the config.
    pub to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_birth: "2000-01-01".to_string(),
            clock: ClockConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            zone_name: "Asia/Kolkata".to_string(),
            utc_offset_minutes: 330,
            refresh_interval_ms: 500,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { to_file: true }
    }
}

impl Config {
    /// Directory holding the config file and the log file.
    pub fn dir() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(dir) = env::var(DIR_ENV_VAR) {
            let path = PathBuf::from(dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path);
        }

        if let Some(proj) = ProjectDirs::from("com", "ageinsight", "age-insight") {
            let config_dir = proj.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            return Some(config_dir.to_path_buf());
        }
        None
    }

    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join(CONFIG_FILE))
    }

    /// Loads the config, falling back to defaults when the file is missing
    /// or does not parse.
    pub fn load() -> Self {
        if let Some(path) = Self::path()
            && path.exists()
        {
            match fs::read_to_string(&path) {
                Ok(text) => match toml::from_str(&text) {
                    Ok(config) => return config,
                    Err(err) => {
                        tracing::warn!("ignoring malformed {}: {err}", path.display());
                    }
                },
                Err(err) => {
                    tracing::warn!("could not read {}: {err}", path.display());
                }
            }
        }
        Self::default()
    }

    /// Writes the config and returns where it landed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path().ok_or_else(|| anyhow!("no usable config directory"))?;
        let text = toml::to_string_pretty(self).context("serializing config")?;
        // Atomic write: .tmp file then rename
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, text).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("replacing {}", path.display()))?;
        Ok(path)
    }

    /// Watch-mode tick length; clamped so a zero in the file cannot spin.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.clock.refresh_interval_ms.max(1))
    }
}
