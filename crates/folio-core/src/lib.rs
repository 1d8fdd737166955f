//! # folio-core: Foundational Types for the Portfolio Content Layer
//!
//! Defines the types every other folio crate builds on: the closed set of
//! content categories, the typed records each category deserializes into,
//! and the identifier newtypes that keep record ids apart.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Category` enum.** Four variants, exhaustive `match`
//!    everywhere. Adding a category forces every consumer to handle it.
//!
//! 2. **Typed records mirror the schemas.** Field names, enum values and
//!    optionality match `schemas/*.schema.json` exactly, so a validated
//!    record serializes back into a document that validates again.
//!
//! 3. **No implicit defaults.** Collections never use `#[serde(default)]`.
//!    Which optional fields default (and to what) is declared in the
//!    schemas and applied by the content store before decoding. The only
//!    serde default is `None` for an absent project metric.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `folio-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod content;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use category::{Category, CATEGORY_COUNT};
pub use content::{
    Certification, Contact, Education, Experience, ExperienceHistory, PersonalInfo, Project,
    ProjectCatalog, ProjectCategory, ProjectMetrics, Skill, SkillCategory, SkillSet, SocialLink,
    Technology, TechnologyCategory,
};
pub use error::FolioError;
pub use identity::{CertificationId, EducationId, ExperienceId, ProjectId};
