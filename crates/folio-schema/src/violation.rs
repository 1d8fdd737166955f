//! # Violations
//!
//! Turns `jsonschema` errors into violations a content author can act on:
//! a dotted field path (`projects[0].category`), the schema keyword that
//! failed, what was expected, and what was found.
//!
//! A missing required property is localized to the property itself
//! (`contact`), not to the object that lacks it, and an object with several
//! undeclared properties yields one violation per property.

use std::fmt;

use folio_core::Category;
use jsonschema::error::ValidationErrorKind;
use jsonschema::ValidationError;
use serde_json::Value;
use thiserror::Error;

/// A single schema-constraint failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted path to the offending field; empty for the document root.
    pub field_path: String,
    /// The schema keyword that failed (`required`, `format`, `maximum`, ...).
    pub constraint: String,
    /// What the schema expected at this location.
    pub expected: String,
    /// The value found, or `None` when the field is absent.
    pub actual: Option<Value>,
    /// JSON Pointer within the schema that triggered the error.
    pub schema_path: String,
    /// The validator's own message.
    pub message: String,
}

impl Violation {
    /// Build violations from one validator error against `root`.
    pub(crate) fn from_error(root: &Value, err: &ValidationError<'_>) -> Vec<Violation> {
        let parent = field_path(root, &err.instance_path.to_string());
        let schema_path = err.schema_path.to_string();
        let message = err.to_string();
        let found = Some(err.instance.clone().into_owned());

        let single = |field_path: String, constraint: &str, expected: String, actual: Option<Value>| {
            vec![Violation {
                field_path,
                constraint: constraint.to_string(),
                expected,
                actual,
                schema_path: schema_path.clone(),
                message: message.clone(),
            }]
        };

        match &err.kind {
            ValidationErrorKind::Required { property } => {
                let name = property
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| property.to_string());
                single(join(&parent, &name), "required", "field to be present".to_string(), None)
            }
            ValidationErrorKind::AdditionalProperties { unexpected } => unexpected
                .iter()
                .map(|name| Violation {
                    field_path: join(&parent, name),
                    constraint: "additionalProperties".to_string(),
                    expected: "no fields beyond those declared".to_string(),
                    actual: err.instance.get(name).cloned(),
                    schema_path: schema_path.clone(),
                    message: message.clone(),
                })
                .collect(),
            ValidationErrorKind::Format { format } => {
                single(parent, "format", format!("format {format:?}"), found)
            }
            ValidationErrorKind::Enum { options } => {
                single(parent, "enum", format!("one of {options}"), found)
            }
            ValidationErrorKind::Minimum { limit } => {
                single(parent, "minimum", format!("a value >= {limit}"), found)
            }
            ValidationErrorKind::Maximum { limit } => {
                single(parent, "maximum", format!("a value <= {limit}"), found)
            }
            ValidationErrorKind::MinLength { limit } => {
                single(parent, "minLength", format!("at least {limit} character(s)"), found)
            }
            _ => {
                let keyword = last_keyword(&schema_path);
                single(parent, &keyword, message.clone(), found)
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.field_path.is_empty() {
            "(root)"
        } else {
            self.field_path.as_str()
        };
        write!(f, "  {path} [{}]: expected {}", self.constraint, self.expected)?;
        match &self.actual {
            Some(value) => write!(f, ", found {value}"),
            None => write!(f, ", found nothing"),
        }
    }
}

/// Collection of validation violations, in validator order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations at exactly this field path.
    pub fn at<'a>(&'a self, field_path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field_path == field_path)
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A category document that does not conform to its schema.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} content failed validation ({} violation(s)):\n{violations}", .category.label(), .violations.len())]
pub struct ContentValidationError {
    /// The category that was rejected.
    pub category: Category,
    /// Every violation found, never empty.
    pub violations: ValidationViolations,
}

/// Convert a JSON Pointer into a dotted field path, using `root` to tell
/// array indices from object keys.
fn field_path(root: &Value, pointer: &str) -> String {
    let mut out = String::new();
    let mut current = Some(root);

    for raw in pointer.split('/').skip(1) {
        let segment = raw.replace("~1", "/").replace("~0", "~");
        match current {
            Some(Value::Array(items)) => {
                out.push_str(&format!("[{segment}]"));
                current = segment.parse::<usize>().ok().and_then(|i| items.get(i));
            }
            other => {
                out = join(&out, &segment);
                current = other.and_then(|v| v.get(segment.as_str()));
            }
        }
    }
    out
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Last non-index segment of a schema path, i.e. the failing keyword.
fn last_keyword(schema_path: &str) -> String {
    schema_path
        .rsplit('/')
        .find(|s| !s.is_empty() && s.parse::<usize>().is_err())
        .unwrap_or("schema")
        .to_string()
}
