//! # List Subcommand
//!
//! Shows each content category, its file, and whether the file exists.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use folio_core::Category;
use folio_schema::DirectorySource;

use crate::config::ContentPaths;

/// Arguments for the `folio list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Execute the list subcommand.
///
/// Returns exit code 0; a missing file is reported, not treated as an error.
pub fn run_list(_args: &ListArgs, paths: &ContentPaths, out: &mut dyn Write) -> Result<u8> {
    let source = DirectorySource::new(&paths.content_dir);
    writeln!(out, "Content categories in {}:", paths.content_dir.display())?;

    for category in Category::all() {
        let file = match source.path_for(*category) {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| category.content_file()),
            None => format!("{} (missing)", category.content_file()),
        };
        writeln!(out, "  - {:<14} {file}", category.as_str())?;
    }
    Ok(0)
}
