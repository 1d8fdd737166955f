//! # Content Store
//!
//! The load-and-validate layer between hand-edited content and the render
//! layer. Every accessor reads the raw document from its source, checks it
//! against the category schema, applies schema-declared defaults, and only
//! then returns it.
//!
//! Each access is one transition: `unvalidated → valid` (data returned) or
//! `unvalidated → rejected` (error returned). There are no retries and no
//! partial results. Documents are re-read on every call; only the compiled
//! validators are cached, inside the [`SchemaRegistry`].

use folio_core::{Category, ExperienceHistory, PersonalInfo, ProjectCatalog, SkillSet};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ContentError, SchemaError};
use crate::registry::SchemaRegistry;
use crate::source::{ContentSource, EmbeddedSource};
use crate::violation::{ContentValidationError, ValidationViolations};

/// Schema-validated access to the content categories.
#[derive(Debug)]
pub struct ContentStore<'r, S> {
    source: S,
    schemas: &'r SchemaRegistry,
}

impl ContentStore<'static, EmbeddedSource> {
    /// A store over the embedded reference content and the builtin schemas.
    pub fn embedded() -> Result<Self, SchemaError> {
        Ok(Self::new(EmbeddedSource, SchemaRegistry::builtin()?))
    }
}

impl<'r, S: ContentSource> ContentStore<'r, S> {
    pub fn new(source: S, schemas: &'r SchemaRegistry) -> Self {
        Self { source, schemas }
    }

    /// The underlying content source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The schema registry used for validation.
    pub fn schemas(&self) -> &'r SchemaRegistry {
        self.schemas
    }

    /// Check a candidate document against the category schema.
    ///
    /// Independent of the source: tooling can verify an edited document
    /// before writing it anywhere.
    ///
    /// # Errors
    ///
    /// [`ContentError::Validation`] listing every violation, or
    /// [`ContentError::Schema`] if the schema itself is unusable.
    pub fn validate(&self, category: Category, candidate: &Value) -> Result<(), ContentError> {
        let violations = self.schemas.check(category, candidate)?;
        if violations.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            category = %category,
            violations = violations.len(),
            "content failed schema validation"
        );
        Err(ContentValidationError {
            category,
            violations: ValidationViolations::new(violations),
        }
        .into())
    }

    /// Read, validate and return the document for `category`.
    ///
    /// The returned document has schema-declared defaults applied.
    pub fn load(&self, category: Category) -> Result<Value, ContentError> {
        let mut document = self.source.read(category)?;
        self.validate(category, &document)?;
        self.schemas.apply_defaults(category, &mut document)?;
        tracing::debug!(category = %category, source = %self.source.describe(), "loaded content");
        Ok(document)
    }

    fn load_as<T: DeserializeOwned>(&self, category: Category) -> Result<T, ContentError> {
        let document = self.load(category)?;
        serde_json::from_value(document).map_err(|e| ContentError::Decode {
            category,
            reason: e.to_string(),
        })
    }

    /// Validated personal info.
    pub fn personal_info(&self) -> Result<PersonalInfo, ContentError> {
        self.load_as(Category::PersonalInfo)
    }

    /// Validated skills and technologies.
    pub fn skills(&self) -> Result<SkillSet, ContentError> {
        self.load_as(Category::Skills)
    }

    /// Validated work history; absent education and certifications are empty.
    pub fn experience(&self) -> Result<ExperienceHistory, ContentError> {
        self.load_as(Category::Experience)
    }

    /// Validated project catalog.
    pub fn projects(&self) -> Result<ProjectCatalog, ContentError> {
        self.load_as(Category::Projects)
    }

    /// Load every category and report each outcome, in canonical order.
    pub fn validate_all(&self) -> ValidationReport {
        self.validate_categories(Category::all())
    }

    /// Load the given categories and report each outcome.
    ///
    /// Each category goes through its typed accessor, so a document that
    /// passes the schema but cannot be decoded is reported as a failure.
    /// A failing category does not stop the others from being checked.
    pub fn validate_categories(&self, categories: &[Category]) -> ValidationReport {
        let outcomes = categories
            .iter()
            .map(|&category| CategoryOutcome {
                category,
                error: self.load_typed(category).err(),
            })
            .collect();
        ValidationReport { outcomes }
    }

    fn load_typed(&self, category: Category) -> Result<(), ContentError> {
        let decoded = match category {
            Category::PersonalInfo => self.personal_info().map(drop),
            Category::Skills => self.skills().map(drop),
            Category::Experience => self.experience().map(drop),
            Category::Projects => self.projects().map(drop),
        };
        if let Err(ContentError::Decode { reason, .. }) = &decoded {
            tracing::warn!(category = %category, reason = %reason, "validated content failed to decode");
        }
        decoded
    }
}

/// The result of validating one category.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: Category,
    /// `None` when the category validated.
    pub error: Option<ContentError>,
}

impl CategoryOutcome {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-category results of [`ContentStore::validate_all`].
#[derive(Debug)]
pub struct ValidationReport {
    outcomes: Vec<CategoryOutcome>,
}

impl ValidationReport {
    pub fn outcomes(&self) -> &[CategoryOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_valid()).count()
    }

    /// Outcomes that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &CategoryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_valid())
    }

    /// True iff every category validated.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CategoryOutcome::is_valid)
    }
}
