//! # folio-schema: Schema-Validated Content Store
//!
//! Loads the four portfolio content categories, checks each against its
//! declarative JSON Schema, and hands typed records to the rendering
//! layer. Invalid content never gets past this crate.
//!
//! ## Schema Registry (`registry`)
//!
//! [`SchemaRegistry`] holds one schema per category plus the shared
//! `technology.schema.json`, resolves cross-schema `$ref`s locally, and
//! compiles each category validator once, on first use.
//! [`SchemaRegistry::builtin`] is the process-wide registry of the
//! schemas shipped in `schemas/`.
//!
//! ## Content Sources (`source`)
//!
//! The store reads raw documents through [`ContentSource`]: a directory on
//! disk, in-memory fixtures, or the reference content embedded at build
//! time.
//!
//! ## Content Store (`store`)
//!
//! - [`ContentStore::load`]: validated JSON for a category.
//! - [`ContentStore::validate`]: the same check on a candidate document.
//! - [`ContentStore::personal_info`], [`ContentStore::skills`],
//!   [`ContentStore::experience`], [`ContentStore::projects`]: typed access.
//! - [`ContentStore::validate_all`]: one outcome per category.
//!
//! ## Crate Policy
//!
//! - Depends only on `folio-core` internally.
//! - Every constraint lives in a schema file. No per-field validation code.
//! - All violations are collected in one pass; a rejected category never
//!   yields partial data.

pub mod error;
pub mod registry;
pub mod source;
pub mod store;
pub mod violation;

pub use error::{ContentError, SchemaError, SourceError};
pub use registry::SchemaRegistry;
pub use source::{ContentSource, DirectorySource, EmbeddedSource, MemorySource};
pub use store::{CategoryOutcome, ContentStore, ValidationReport};
pub use violation::{ContentValidationError, ValidationViolations, Violation};
