//! # Validate Subcommand
//!
//! Schema-checks content categories and prints one line per category plus
//! one line per violation. Exit code 0 iff every requested category
//! validates.
//!
//! Schema validation is the only gate between hand-edited content and the
//! site build, so CI runs `folio validate` before every deploy.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use folio_core::Category;
use folio_schema::{ContentError, ContentStore, DirectorySource, SchemaRegistry};

use crate::config::ContentPaths;

/// Arguments for the `folio validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Categories to validate (`personalInfo`, `skills`, ... or file stems).
    /// Validates all categories when omitted.
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<Category>,
}

/// Load the schema registry from the configured directory.
pub(crate) fn load_schemas(paths: &ContentPaths) -> Result<SchemaRegistry> {
    let registry = SchemaRegistry::from_dir(&paths.schema_dir)
        .with_context(|| format!("failed to load schemas from {}", paths.schema_dir.display()))?;
    tracing::info!(
        schema_count = registry.schema_count(),
        origin = registry.origin(),
        "loaded schema registry"
    );
    Ok(registry)
}

/// Print a store error: each violation on its own line, or the operational error.
pub(crate) fn write_error(out: &mut dyn Write, err: &ContentError) -> Result<()> {
    match err.as_validation() {
        Some(validation) => {
            for violation in validation.violations.violations() {
                writeln!(out, "{violation}")?;
            }
        }
        None => writeln!(out, "  {err}")?,
    }
    Ok(())
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every category validates, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, paths: &ContentPaths, out: &mut dyn Write) -> Result<u8> {
    let registry = load_schemas(paths)?;
    let store = ContentStore::new(DirectorySource::new(&paths.content_dir), &registry);

    let categories: &[Category] = if args.categories.is_empty() {
        Category::all()
    } else {
        &args.categories
    };

    writeln!(out, "Validating content in {}", paths.content_dir.display())?;
    let report = store.validate_categories(categories);

    for outcome in report.outcomes() {
        let category = outcome.category;
        match &outcome.error {
            None => writeln!(out, "OK:   {} ({})", category.label(), category.content_file())?,
            Some(err) => {
                match err.as_validation() {
                    Some(v) => writeln!(
                        out,
                        "FAIL: {} ({}): {} violation(s)",
                        category.label(),
                        category.content_file(),
                        v.violations.len()
                    )?,
                    None => writeln!(out, "FAIL: {} ({})", category.label(), category.content_file())?,
                }
                write_error(out, err)?;
            }
        }
    }

    writeln!(out, "\nContent: {}/{} categories passed", report.passed(), report.total())?;

    if report.is_success() {
        writeln!(out, "All content is valid.")?;
        Ok(0)
    } else {
        writeln!(out, "Some content has validation errors. Fix them before deploying.")?;
        Ok(1)
    }
}
