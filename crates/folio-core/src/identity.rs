//! # Record Identifiers
//!
//! Newtype wrappers for the `id` fields of content records. You cannot
//! look up a project with an `ExperienceId`.
//!
//! All identifiers serialize transparently as plain strings, matching the
//! `id` properties in the content schemas.

use serde::{Deserialize, Serialize};

/// Identifier of a portfolio project, e.g. `ml-pipeline`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

/// Identifier of a work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceId(pub String);

/// Identifier of an education entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EducationId(pub String);

/// Identifier of a certification entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificationId(pub String);

macro_rules! string_id {
    ($($ty:ident),+ $(,)?) => {$(
        impl $ty {
            /// Wrap a raw identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Access the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    )+};
}

string_id!(ProjectId, ExperienceId, EducationId, CertificationId);
