//! # Error Types
//!
//! Errors raised by the foundational types. Validation failures live in
//! `folio-schema`; this crate only reports problems it can detect on its
//! own, such as an unknown category name.

use thiserror::Error;

/// Top-level error type for the foundational types.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A category name did not match any known category.
    #[error("unknown content category: {0:?} (expected one of personalInfo, skills, experience, projects)")]
    UnknownCategory(String),
}
