use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub home: Home,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Home {
    #[serde(default = "default_home_dir")]
    pub home_dir: PathBuf,
    #[serde(default)]
    pub canonicalize: bool,
}
fn default_home_dir() -> PathBuf { PathBuf::from(".") }

impl Default for Home {
    fn default() -> Self {
        Self { home_dir: default_home_dir(), canonicalize: false }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}
fn default_filter() -> String { "info".to_string() }

impl Default for Logging {
    fn default() -> Self {
        Self { filter: default_filter(), json: false }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Self::from_toml_str(&raw)
        }
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.home.home_dir.as_os_str().is_empty() { anyhow::bail!("home_dir must not be empty"); }
        if !self.home.home_dir.is_dir() {
            anyhow::bail!("home_dir does not exist or is not a directory: {}", self.home.home_dir.display());
        }
        if self.logging.filter.trim().is_empty() { anyhow::bail!("logging filter must not be empty"); }
        Ok(())
    }

    /// Home directory as the connection should see it.
    pub fn resolved_home(&self) -> anyhow::Result<PathBuf> {
        if self.home.canonicalize {
            canonical_home(&self.home.home_dir)
        } else {
            Ok(self.home.home_dir.clone())
        }
    }
}

pub fn canonical_home(home: &Path) -> anyhow::Result<PathBuf> {
    let c = dunce::canonicalize(home)?;
    Ok(c)
}
