//! Test-only helpers: deterministic project records and a scripted transport.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tempfile::TempDir;

use crate::core::form::FormState;
use crate::io::transport::Transport;
use crate::project::Project;

/// Create a deterministic project with the given title.
pub fn project(title: &str) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{} description", title),
        tech: vec!["Rust".to_string()],
        repository_link: format!("https://github.com/example/{}", title),
        demo_link: format!("https://{}.example.com", title),
        image_url: format!("/images/{}.png", title),
    }
}

/// `count` projects titled `project-0`, `project-1`, ...
pub fn projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|index| project(&format!("project-{}", index)))
        .collect()
}

/// Transport that records every submission and replays a fixed outcome.
#[derive(Debug)]
pub struct ScriptedTransport {
    failure: Option<String>,
    sent: Mutex<Vec<FormState>>,
}

impl ScriptedTransport {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `message` (blank exercises the generic text).
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.sent().len()
    }

    pub fn sent(&self) -> Vec<FormState> {
        self.sent.lock().expect("sent lock").clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, form: &FormState) -> Result<()> {
        self.sent.lock().expect("sent lock").push(form.clone());
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

/// Temporary working directory holding an optional `portfolio.toml`.
pub struct ConfigDir {
    temp: TempDir,
}

impl ConfigDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp.path()
    }

    /// Write `contents` to `portfolio.toml` and return its path.
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.temp.path().join("portfolio.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
