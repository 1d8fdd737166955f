//! # Content Category: Single Source of Truth
//!
//! Defines the `Category` enum naming the four content domains of the
//! portfolio. This is the ONE definition used by the schema registry, the
//! content sources, the content store and the CLI. Every `match` on
//! `Category` must be exhaustive.
//!
//! Each category owns a content file (`<stem>.json`) and a schema file
//! (`<stem>.schema.json`); both names are derived here and nowhere else.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FolioError;

/// The content domains of the portfolio.
///
/// | # | Category | Identifier | Content file |
/// |---|----------|------------|--------------|
/// | 1 | PersonalInfo | `personalInfo` | `personal-info.json` |
/// | 2 | Skills | `skills` | `skills.json` |
/// | 3 | Experience | `experience` | `experience.json` |
/// | 4 | Projects | `projects` | `projects.json` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Name, title, bio, contact details and social links.
    PersonalInfo,
    /// Rated skills and technologies.
    Skills,
    /// Work history, education and certifications.
    Experience,
    /// Portfolio projects.
    Projects,
}

/// Total number of content categories.
pub const CATEGORY_COUNT: usize = 4;

impl Category {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Self::PersonalInfo,
            Self::Skills,
            Self::Experience,
            Self::Projects,
        ]
    }

    /// Returns the camelCase identifier for this category.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personalInfo",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
        }
    }

    /// Returns the kebab-case stem shared by the content and schema files.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal-info",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
        }
    }

    /// Returns the human-readable label used in CLI reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
        }
    }

    /// Content file name, e.g. `personal-info.json`.
    pub fn content_file(&self) -> String {
        format!("{}.json", self.file_stem())
    }

    /// Schema file name, e.g. `personal-info.schema.json`.
    pub fn schema_file(&self) -> String {
        format!("{}.schema.json", self.file_stem())
    }

    /// Position of this category in [`Category::all`].
    pub fn index(&self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::Skills => 1,
            Self::Experience => 2,
            Self::Projects => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FolioError;

    /// Parse a category from its identifier (`personalInfo`), its file stem
    /// (`personal-info`) or its content file name (`personal-info.json`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stem = s.strip_suffix(".json").unwrap_or(s);
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == stem || c.file_stem() == stem)
            .ok_or_else(|| FolioError::UnknownCategory(s.to_string()))
    }
}
