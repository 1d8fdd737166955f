//! # Show Subcommand
//!
//! Prints one category's content as pretty JSON. By default the content
//! goes through the store, so what is printed is exactly what the site
//! would render (defaults applied); `--raw` prints the file as-is, which
//! is what you want while fixing a file that does not validate.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use folio_core::Category;
use folio_schema::{ContentSource, ContentStore, DirectorySource};

use crate::config::ContentPaths;
use crate::validate::{load_schemas, write_error};

/// Arguments for the `folio show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Category to show (`personalInfo`, `personal-info`, `personal-info.json`, ...).
    pub category: Category,

    /// Print the file without validating it.
    #[arg(long)]
    pub raw: bool,
}

/// Execute the show subcommand.
///
/// Returns exit code: 0 on success, 1 if the content cannot be read or
/// fails validation.
pub fn run_show(args: &ShowArgs, paths: &ContentPaths, out: &mut dyn Write) -> Result<u8> {
    let source = DirectorySource::new(&paths.content_dir);

    let document = if args.raw {
        match source.read(args.category) {
            Ok(document) => document,
            Err(e) => {
                writeln!(out, "ERROR: {e}")?;
                return Ok(1);
            }
        }
    } else {
        let registry = load_schemas(paths)?;
        let store = ContentStore::new(source, &registry);
        match store.load(args.category) {
            Ok(document) => document,
            Err(e) => {
                writeln!(out, "FAIL: {} ({})", args.category.label(), args.category.content_file())?;
                write_error(out, &e)?;
                return Ok(1);
            }
        }
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(0)
}
