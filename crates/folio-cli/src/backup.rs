//! # Backup Subcommand
//!
//! Copies every content file into
//! `<backup_dir>/content-backup-<UTC timestamp>/` before hand edits.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use folio_schema::DirectorySource;

use crate::config::ContentPaths;

/// Arguments for the `folio backup` subcommand.
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Directory to create the backup in (overrides `backup_dir`).
    #[arg(long)]
    pub dest: Option<PathBuf>,
}

/// Copy the content files of `content_dir` into a new timestamped
/// directory under `backup_root`. Returns the new directory.
pub fn backup_content(content_dir: &Path, backup_root: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let files = DirectorySource::new(content_dir).content_files();
    if files.is_empty() {
        bail!("no content files found in {}", content_dir.display());
    }

    let target = backup_root.join(format!("content-backup-{}", now.format("%Y-%m-%dT%H-%M-%SZ")));
    if target.exists() {
        bail!("backup directory already exists: {}", target.display());
    }
    std::fs::create_dir_all(&target)
        .with_context(|| format!("cannot create backup directory {}", target.display()))?;

    for (category, path) in &files {
        let Some(name) = path.file_name() else { continue };
        std::fs::copy(path, target.join(name))
            .with_context(|| format!("cannot back up {}", path.display()))?;
        tracing::debug!(category = %category, file = %path.display(), "backed up content file");
    }

    tracing::info!(files = files.len(), target = %target.display(), "content backed up");
    Ok(target)
}

/// Execute the backup subcommand.
pub fn run_backup(args: &BackupArgs, paths: &ContentPaths, out: &mut dyn Write) -> Result<u8> {
    let backup_root = match &args.dest {
        Some(dest) => crate::resolve_path(dest, &paths.repo_root),
        None => paths.backup_dir.clone(),
    };
    let target = backup_content(&paths.content_dir, &backup_root, Utc::now())?;
    writeln!(out, "Content backed up to: {}", target.display())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn copies_every_content_file() {
        let content = tempfile::tempdir().unwrap();
        let backups = tempfile::tempdir().unwrap();
        std::fs::write(content.path().join("skills.json"), "{}").unwrap();
        std::fs::write(content.path().join("projects.yaml"), "projects: []\n").unwrap();
        std::fs::write(content.path().join("notes.md"), "not content").unwrap();

        let target = backup_content(content.path(), backups.path(), fixed_time()).unwrap();
        assert_eq!(
            target,
            backups.path().join("content-backup-2026-03-14T09-26-53Z")
        );
        assert!(target.join("skills.json").is_file());
        assert!(target.join("projects.yaml").is_file());
        assert!(!target.join("notes.md").exists());
    }

    #[test]
    fn empty_content_dir_is_an_error() {
        let content = tempfile::tempdir().unwrap();
        let backups = tempfile::tempdir().unwrap();
        assert!(backup_content(content.path(), backups.path(), fixed_time()).is_err());
    }

    #[test]
    fn refuses_to_overwrite_existing_backup() {
        let content = tempfile::tempdir().unwrap();
        let backups = tempfile::tempdir().unwrap();
        std::fs::write(content.path().join("skills.json"), "{}").unwrap();

        backup_content(content.path(), backups.path(), fixed_time()).unwrap();
        assert!(backup_content(content.path(), backups.path(), fixed_time()).is_err());
    }
}
