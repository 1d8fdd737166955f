//! # Error Types
//!
//! Operational errors of the content layer. A document that merely fails
//! its schema is reported as [`ContentValidationError`]; everything here
//! means the check itself could not run (missing schema, unreadable file)
//! or the validated data could not be decoded.

use folio_core::Category;
use thiserror::Error;

use crate::violation::ContentValidationError;

/// Failure to load or compile a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read or parsed.
    #[error("schema load error for '{name}': {reason}")]
    Load {
        /// Schema filename or identifier.
        name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The registry has no schema under this name.
    #[error("schema '{name}' not found in {origin}")]
    NotFound {
        /// Schema filename.
        name: String,
        /// Where the registry was loaded from.
        origin: String,
    },

    /// The compiled validator could not be built (e.g., invalid schema).
    #[error("validator build error for schema '{name}': {reason}")]
    Compile {
        /// Schema filename.
        name: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// IO error reading the schema directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to obtain a raw content document.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source has no document for the category.
    #[error("no {category} content found in {location}")]
    NotFound {
        /// Requested category.
        category: Category,
        /// Directory or source description that was searched.
        location: String,
    },

    /// The document exists but is not well-formed JSON/YAML.
    #[error("cannot parse {category} content at {location}: {reason}")]
    Parse {
        /// Requested category.
        category: Category,
        /// File path or source description.
        location: String,
        /// Parser message.
        reason: String,
    },

    /// The document could not be read.
    #[error("cannot read {location}: {source}")]
    Io {
        /// File path.
        location: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Error returned by the content store.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The document violates its category schema.
    #[error(transparent)]
    Validation(#[from] ContentValidationError),

    /// The category schema is unavailable or does not compile.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The raw document could not be obtained.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The validated document does not fit the typed record.
    #[error("validated {category} content could not be decoded: {reason}")]
    Decode {
        /// Category being decoded.
        category: Category,
        /// Deserializer message.
        reason: String,
    },
}

impl ContentError {
    /// The schema violations, if this is a validation failure.
    pub fn as_validation(&self) -> Option<&ContentValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
