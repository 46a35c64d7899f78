//! Portfolio configuration stored in `portfolio.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

/// Webhook destination baked in at build time, used when the config has none.
pub const BUILD_WEBHOOK_URL: Option<&str> = option_env!("PORTFOLIO_WEBHOOK_URL");

/// Portfolio configuration (TOML).
///
/// Every field is optional; a missing file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PortfolioConfig {
    pub contact: ContactConfig,
    pub projects: ProjectsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    /// Destination for contact form submissions (http or https).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds. No timeout is applied when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Project list to load instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

impl ContactConfig {
    /// Configured webhook URL, else the build-time one.
    pub fn resolved_webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref().or(BUILD_WEBHOOK_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl PortfolioConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.contact.webhook_url {
            parse_webhook_url(url)?;
        }
        if self.contact.timeout_secs == Some(0) {
            return Err(anyhow!("contact.timeout_secs must be > 0"));
        }
        if let Some(path) = &self.projects.data_path {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("projects.data_path must not be empty"));
            }
        }
        Ok(())
    }
}

/// Parse a webhook URL, accepting only http and https.
pub fn parse_webhook_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("contact.webhook_url must not be blank"));
    }
    let url = Url::parse(trimmed).with_context(|| format!("parse webhook url '{}'", trimmed))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "contact.webhook_url must use http or https (got '{}')",
            other
        )),
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PortfolioConfig::default()`. A relative
/// `projects.data_path` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<PortfolioConfig> {
    if !path.exists() {
        return Ok(PortfolioConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg: PortfolioConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    cfg.projects.data_path = cfg
        .projects
        .data_path
        .take()
        .map(|data_path| match path.parent() {
            Some(base) if data_path.is_relative() => base.join(data_path),
            _ => data_path,
        });
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PortfolioConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
