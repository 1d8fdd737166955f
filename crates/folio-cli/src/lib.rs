//! # folio-cli: Portfolio Content Tool
//!
//! The `folio` command-line interface over the schema-validated content
//! store. It is the main consumer of `folio-schema` outside the site
//! itself and is what CI runs before a deploy.
//!
//! ## Subcommands
//!
//! - `folio list`: content categories and whether their files exist.
//! - `folio show <category>`: a category's content as pretty JSON.
//! - `folio validate [<category>...]`: schema-check content; exit 1 on any failure.
//! - `folio backup`: copy the content files into a timestamped directory.
//! - `folio project-template`: a valid project record to start from.
//!
//! ```bash
//! folio validate
//! folio show personal-info
//! folio backup --dest /tmp/folio-backups
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers delegate to `folio-schema`; no validation logic here.
//! - Handlers write to the `out` writer they are given and return an exit code.

pub mod backup;
pub mod config;
pub mod list;
pub mod show;
pub mod template;
pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is; relative ones are joined onto
/// `repo_root`.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}

/// Walk up from `start` to find the repository root.
///
/// The repo root is identified by the presence of both `content/` and
/// `schemas/` directories.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join("content").is_dir() && dir.join("schemas").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
