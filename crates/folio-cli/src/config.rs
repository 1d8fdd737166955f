//! # Configuration
//!
//! Optional `folio.yaml` at the repository root:
//!
//! ```yaml
//! content_dir: content
//! schema_dir: schemas
//! backup_dir: backups
//! ```
//!
//! Relative paths resolve against the repository root. Command-line flags
//! take precedence over the file, and the file over the defaults above.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::resolve_path;

/// Name of the configuration file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "folio.yaml";

/// Contents of `folio.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    pub content_dir: Option<PathBuf>,
    pub schema_dir: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
}

impl FolioConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        // An empty file is an empty config, not a YAML null.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load `explicit` if given, else `<repo_root>/folio.yaml` if it exists,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = repo_root.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "using config file");
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Directories every subcommand works with, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPaths {
    pub repo_root: PathBuf,
    pub content_dir: PathBuf,
    pub schema_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl ContentPaths {
    /// Combine defaults, the config file, and command-line overrides.
    pub fn resolve(
        repo_root: &Path,
        config: &FolioConfig,
        content_dir: Option<&Path>,
        schema_dir: Option<&Path>,
    ) -> Self {
        let pick = |flag: Option<&Path>, configured: &Option<PathBuf>, default: &str| {
            let chosen = flag
                .map(Path::to_path_buf)
                .or_else(|| configured.clone())
                .unwrap_or_else(|| PathBuf::from(default));
            resolve_path(&chosen, repo_root)
        };

        Self {
            repo_root: repo_root.to_path_buf(),
            content_dir: pick(content_dir, &config.content_dir, "content"),
            schema_dir: pick(schema_dir, &config.schema_dir, "schemas"),
            backup_dir: pick(None, &config.backup_dir, "backups"),
        }
    }
}
