//! Project list loading with schema + invariant validation.
//!
//! The default list is bundled into the binary. An alternate JSON file can be
//! supplied through `projects.data_path`; it is held to the same schema.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::core::catalog::validate_records;
use crate::project::Project;

pub const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");
pub const PROJECTS_SCHEMA: &str = include_str!("../../schemas/projects/v1.schema.json");

/// Parse and validate a project list. `origin` names the source in errors.
pub fn parse_projects(contents: &str, origin: &str) -> Result<Vec<Project>> {
    let value: Value =
        serde_json::from_str(contents).with_context(|| format!("parse projects {}", origin))?;
    validate_schema(&value).with_context(|| format!("validate projects {}", origin))?;
    let projects: Vec<Project> = serde_json::from_value(value)
        .with_context(|| format!("deserialize projects {}", origin))?;
    let errors = validate_records(&projects);
    if !errors.is_empty() {
        return Err(anyhow!(
            "project invariants failed for {}: {}",
            origin,
            errors.join("; ")
        ));
    }
    Ok(projects)
}

/// The list compiled into the binary.
pub fn load_bundled() -> Result<Vec<Project>> {
    parse_projects(BUNDLED_PROJECTS, "(bundled)")
}

/// Load and validate a project list from disk.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read projects {}", path.display()))?;
    parse_projects(&contents, &path.display().to_string())
}

/// Initial data for the listing. Never fails: a broken source is logged and
/// the listing starts empty.
#[instrument(skip_all, fields(source = ?source))]
pub fn mount(source: Option<&Path>) -> Vec<Project> {
    let loaded = match source {
        Some(path) => load_projects(path),
        None => load_bundled(),
    };
    match loaded {
        Ok(projects) => {
            debug!(count = projects.len(), "projects loaded");
            projects
        }
        Err(err) => {
            let error = format!("{:#}", err);
            warn!(%error, "failed to load projects; starting empty");
            Vec::new()
        }
    }
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(PROJECTS_SCHEMA).context("parse projects schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(value) {
        let messages = compiled
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!("schema validation failed: {}", messages.join("; ")));
    }
    Ok(())
}
