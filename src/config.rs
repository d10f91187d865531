//! Credential storage for the Groq API key.
//!
//! Keys resolve environment-first (`GROQ_API_KEY`), then the JSON config
//! file under the user config directory. The store is owner-only: 0600 on
//! the file, 0700 on the directory. A corrupt or missing file reads as an
//! empty config; unknown keys in the file survive rewrites.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
const CONFIG_DIR_NAME: &str = "naturally-linux";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    groq_api_key: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Store rooted at a config directory; the default location follows the
/// XDG convention via `dirs`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            dir: base.join(CONFIG_DIR_NAME),
        }
    }

    /// Store rooted at an explicit directory. Tests point this at a
    /// temporary directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Directory for log files, alongside the config file.
    pub fn log_dir(&self) -> PathBuf {
        self.dir.join("logs")
    }

    fn load(&self) -> ConfigFile {
        let raw = match fs::read_to_string(self.path()) {
            Ok(raw) => raw,
            Err(_) => return ConfigFile::default(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, config: &ConfigFile) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create config directory: {}", self.dir.display())
        })?;
        restrict_dir_permissions(&self.dir);

        let data = serde_json::to_vec_pretty(config).context("Failed to serialize config")?;
        let path = self.path();
        let tmp = path.with_extension("json.tmp");
        write_private(&tmp, &data)?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    /// The stored key only; the environment is checked by
    /// `resolve_api_key`.
    pub fn api_key(&self) -> Option<String> {
        self.load().groq_api_key
    }

    /// Environment-first credential lookup.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                return Some(key);
            }
        }
        self.api_key()
    }

    pub fn set_api_key(&self, value: &str) -> Result<()> {
        let mut config = self.load();
        config.groq_api_key = Some(value.to_string());
        self.save(&config)
    }

    /// Returns whether a key was present.
    pub fn delete_api_key(&self) -> Result<bool> {
        let mut config = self.load();
        if config.groq_api_key.take().is_none() {
            return Ok(false);
        }
        self.save(&config)?;
        Ok(true)
    }
}

/// Mask a key for display: first four and last four characters. Keys too
/// short to mask meaningfully are fully hidden.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Owner-only mask on the config directory. Like any chmod on a path the
/// user may not fully own, failure is not fatal.
#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
        tracing::debug!("Failed to restrict config directory permissions: {}", e);
    }
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) {}

/// Write with the file created owner-read/write from the start, so the
/// key is never readable by other users, not even briefly.
#[cfg(unix)]
fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    use std::io::Write as _;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}
