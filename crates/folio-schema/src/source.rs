//! # Content Sources
//!
//! Where raw content documents come from. The store only depends on the
//! [`ContentSource`] trait, so validation can be exercised against
//! in-memory fixtures as easily as against files on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use folio_core::Category;
use serde_json::Value;

use crate::error::SourceError;

/// A provider of raw (unvalidated) content documents.
pub trait ContentSource {
    /// Human-readable location of the source, used in logs and errors.
    fn describe(&self) -> String;

    /// Read the raw document for `category`.
    fn read(&self, category: Category) -> Result<Value, SourceError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read(&self, category: Category) -> Result<Value, SourceError> {
        (**self).read(category)
    }
}

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Content files in a directory: `<stem>.json`, or `<stem>.yaml`/`.yml`.
///
/// When several exist, JSON wins.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

const EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The content directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that holds `category`, if any.
    pub fn path_for(&self, category: Category) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{ext}", category.file_stem())))
            .find(|p| p.is_file())
    }

    /// Every category file present in the directory, in canonical order.
    pub fn content_files(&self) -> Vec<(Category, PathBuf)> {
        Category::all()
            .iter()
            .filter_map(|c| self.path_for(*c).map(|p| (*c, p)))
            .collect()
    }
}

impl ContentSource for DirectorySource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn read(&self, category: Category) -> Result<Value, SourceError> {
        let path = self.path_for(category).ok_or_else(|| SourceError::NotFound {
            category,
            location: self.describe(),
        })?;
        let location = path.display().to_string();

        let content = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            location: location.clone(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");

        let parsed = if is_yaml {
            serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
        };

        tracing::trace!(category = %category, path = %location, "read content file");
        parsed.map_err(|reason| SourceError::Parse {
            category,
            location,
            reason,
        })
    }
}

// ---------------------------------------------------------------------------
// MemorySource
// ---------------------------------------------------------------------------

/// In-memory documents, for tests and tooling that edits content before
/// saving it.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Category, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, category: Category, document: Value) -> Self {
        self.insert(category, document);
        self
    }

    /// Insert or replace the document for `category`.
    pub fn insert(&mut self, category: Category, document: Value) {
        self.documents.insert(category, document);
    }
}

impl ContentSource for MemorySource {
    fn describe(&self) -> String {
        "in-memory content".to_string()
    }

    fn read(&self, category: Category) -> Result<Value, SourceError> {
        self.documents
            .get(&category)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                category,
                location: self.describe(),
            })
    }
}

// ---------------------------------------------------------------------------
// EmbeddedSource
// ---------------------------------------------------------------------------

/// The reference content from `content/`, compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    fn text(category: Category) -> &'static str {
        match category {
            Category::PersonalInfo => include_str!("../../../content/personal-info.json"),
            Category::Skills => include_str!("../../../content/skills.json"),
            Category::Experience => include_str!("../../../content/experience.json"),
            Category::Projects => include_str!("../../../content/projects.json"),
        }
    }
}

impl ContentSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded reference content".to_string()
    }

    fn read(&self, category: Category) -> Result<Value, SourceError> {
        serde_json::from_str(Self::text(category)).map_err(|e| SourceError::Parse {
            category,
            location: format!("embedded {}", category.content_file()),
            reason: e.to_string(),
        })
    }
}
