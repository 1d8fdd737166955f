//! # Typed Content Records
//!
//! The Rust shape of each content category. These types are produced by
//! the content store only after the raw document has passed schema
//! validation, so they carry no validation logic of their own.
//!
//! Serialization mirrors the schemas: camelCase field names, enum values
//! as declared in the schema `enum` lists, and absent optional scalars
//! omitted rather than written as `null`.
//!
//! Ratings and metrics accept any integral JSON number, so `4` and `4.0`
//! decode alike; that is what a schema `"type": "integer"` admits.

use serde::{Deserialize, Serialize};

use crate::identity::{CertificationId, EducationId, ExperienceId, ProjectId};

// ---------------------------------------------------------------------------
// Personal info
// ---------------------------------------------------------------------------

/// The `personalInfo` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub contact: Contact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub social_links: Vec<SocialLink>,
}

/// Contact details. Email is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A link to a profile on another site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// The `skills` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub skills: Vec<Skill>,
    pub technologies: Vec<Technology>,
}

/// A rated skill. `level` is on a 1-5 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "whole::rating")]
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
}

/// A technology with a 1-5 proficiency rating.
///
/// Shared by skills, experience entries and projects; its schema lives in
/// `technology.schema.json` and is pulled in by `$ref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub category: TechnologyCategory,
    #[serde(deserialize_with = "whole::rating")]
    pub proficiency: u8,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyCategory {
    Language,
    Framework,
    Tool,
    Platform,
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// The `experience` category.
///
/// `education` and `certifications` are optional in the source document;
/// the schema declares an empty-array default for both, which the content
/// store applies before decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceHistory {
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: EducationId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: CertificationId,
    pub name: String,
    pub issuer: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// The `projects` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<Technology>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProjectMetrics>,
}

/// Project classification. Serialized in kebab-case (`ai-ml`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    AiMl,
    WebDevelopment,
    DataScience,
    Automation,
    Research,
}

impl ProjectCategory {
    /// All project categories in declaration order.
    pub fn all() -> &'static [ProjectCategory] {
        &[
            Self::AiMl,
            Self::WebDevelopment,
            Self::DataScience,
            Self::Automation,
            Self::Research,
        ]
    }

    /// The identifier used in content files and the schema `enum`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiMl => "ai-ml",
            Self::WebDevelopment => "web-development",
            Self::DataScience => "data-science",
            Self::Automation => "automation",
            Self::Research => "research",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Popularity figures shown on project cards. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole::optional_count"
    )]
    pub stars: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole::optional_count"
    )]
    pub forks: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole::optional_count"
    )]
    pub downloads: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "whole::optional_count"
    )]
    pub users: Option<u64>,
}

impl ProjectCatalog {
    /// Projects flagged for the home page, in content order.
    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Projects in the given category, in content order.
    pub fn in_category(&self, category: ProjectCategory) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.category == category)
    }

    /// Look up a project by id.
    pub fn by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id.as_str() == id)
    }

    /// Distinct categories present in the catalog, in order of first appearance.
    pub fn categories(&self) -> Vec<ProjectCategory> {
        let mut seen = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category) {
                seen.push(project.category);
            }
        }
        seen
    }
}

/// Deserializers for integral numbers that may be written with a
/// fractional part of zero.
mod whole {
    use std::fmt;

    use serde::de::{Deserializer, Error, Unexpected, Visitor};

    struct WholeNumber;

    impl<'de> Visitor<'de> for WholeNumber {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative whole number")
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<u64, E> {
            if v.fract() == 0.0 && v >= 0.0 && v <= u64::MAX as f64 {
                Ok(v as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    pub(super) fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let value = deserializer.deserialize_any(WholeNumber)?;
        u8::try_from(value)
            .map_err(|_| D::Error::invalid_value(Unexpected::Unsigned(value), &"a rating below 256"))
    }

    pub(super) fn optional_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        deserializer.deserialize_any(WholeNumber).map(Some)
    }
}
