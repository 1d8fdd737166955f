//! # Schema Registry
//!
//! Declarative JSON Schemas (Draft 2020-12) for the content categories and
//! the machinery to check documents against them.
//!
//! ## Schema Resolution
//!
//! All schemas use `$id` URIs of the form
//! `https://folio.local/schemas/<filename>`. Cross-schema `$ref`s (the
//! shared `technology.schema.json`) are resolved from the schemas already
//! loaded in the registry; nothing is ever fetched over the network.
//!
//! ## Compiled-Validator Cache
//!
//! Each category validator is compiled on first use and kept for the
//! lifetime of the registry. The slots are write-once, so readers never
//! observe a half-built validator and nothing is ever invalidated.
//!
//! ## Defaults
//!
//! An optional property whose schema declares a `default` is filled in by
//! [`SchemaRegistry::apply_defaults`]. Required properties are never
//! defaulted: a missing required field is always a violation.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use folio_core::{Category, CATEGORY_COUNT};
use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::error::SchemaError;
use crate::violation::Violation;

/// URI prefix of every schema `$id` in this repository.
pub const SCHEMA_URI_PREFIX: &str = "https://folio.local/schemas/";

/// Schemas compiled into the binary, keyed by filename.
const EMBEDDED_SCHEMAS: &[(&str, &str)] = &[
    (
        "personal-info.schema.json",
        include_str!("../../../schemas/personal-info.schema.json"),
    ),
    (
        "skills.schema.json",
        include_str!("../../../schemas/skills.schema.json"),
    ),
    (
        "experience.schema.json",
        include_str!("../../../schemas/experience.schema.json"),
    ),
    (
        "projects.schema.json",
        include_str!("../../../schemas/projects.schema.json"),
    ),
    (
        "technology.schema.json",
        include_str!("../../../schemas/technology.schema.json"),
    ),
];

static BUILTIN: OnceLock<SchemaRegistry> = OnceLock::new();

/// Local retriever that resolves `$ref` URIs to schemas held in memory.
struct LocalSchemaRetriever {
    /// Map from URI string to schema value.
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        lookup_uri(&self.schemas_by_uri, uri_str)
            .cloned()
            .ok_or_else(|| format!("schema not found for URI: {uri_str}").into())
    }
}

/// Find a schema by `$id`, falling back to its bare filename under
/// [`SCHEMA_URI_PREFIX`].
fn lookup_uri<'a>(schemas_by_uri: &'a HashMap<String, Value>, uri: &str) -> Option<&'a Value> {
    schemas_by_uri.get(uri).or_else(|| {
        let filename = uri.rsplit('/').next().unwrap_or(uri);
        schemas_by_uri.get(&format!("{SCHEMA_URI_PREFIX}{filename}"))
    })
}

/// The set of content schemas plus one memoized validator per category.
pub struct SchemaRegistry {
    /// Where the schemas came from, for diagnostics.
    origin: String,
    /// Schemas indexed by filename (e.g. `skills.schema.json`).
    schemas: HashMap<String, Value>,
    /// The same schemas indexed by `$id` URI, for `$ref` resolution.
    schemas_by_uri: HashMap<String, Value>,
    /// Compiled validators, indexed by [`Category::index`].
    compiled: [OnceLock<Validator>; CATEGORY_COUNT],
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("origin", &self.origin)
            .field("schema_count", &self.schemas.len())
            .finish()
    }
}

impl SchemaRegistry {
    /// The process-wide registry of the schemas shipped with the crate.
    ///
    /// Built on first call; later calls return the same instance, so its
    /// compiled validators are shared by every store that uses it.
    pub fn builtin() -> Result<&'static SchemaRegistry, SchemaError> {
        if let Some(registry) = BUILTIN.get() {
            return Ok(registry);
        }
        let registry = Self::from_documents(
            "builtin schemas",
            EMBEDDED_SCHEMAS
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string())),
        )?;
        Ok(BUILTIN.get_or_init(|| registry))
    }

    /// Load every `*.schema.json` file in `schema_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if the directory cannot be read or a
    /// schema file is not valid JSON.
    pub fn from_dir(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref();
        let entries = std::fs::read_dir(schema_dir).map_err(|e| SchemaError::Load {
            name: schema_dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        let mut documents = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(".schema.json") {
                    documents.push((name.to_string(), std::fs::read_to_string(&path)?));
                }
            }
        }

        Self::from_documents(schema_dir.display().to_string(), documents)
    }

    /// Build a registry from `(filename, JSON text)` pairs.
    pub fn from_documents(
        origin: impl Into<String>,
        documents: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();
        for (name, text) in documents {
            let value: Value = serde_json::from_str(&text).map_err(|e| SchemaError::Load {
                name: name.clone(),
                reason: format!("invalid JSON: {e}"),
            })?;
            schemas.insert(name, value);
        }
        Ok(Self::from_values(origin, schemas))
    }

    /// Build a registry from already-parsed schemas keyed by filename.
    pub fn from_values(origin: impl Into<String>, schemas: HashMap<String, Value>) -> Self {
        let mut schemas_by_uri = HashMap::new();
        for (filename, value) in &schemas {
            schemas_by_uri.insert(format!("{SCHEMA_URI_PREFIX}{filename}"), value.clone());
            if let Some(id) = value.get("$id").and_then(|v| v.as_str()) {
                schemas_by_uri.insert(id.to_string(), value.clone());
            }
        }

        let origin = origin.into();
        tracing::debug!(origin = %origin, schema_count = schemas.len(), "loaded schema registry");

        Self {
            origin,
            schemas,
            schemas_by_uri,
            compiled: Default::default(),
        }
    }

    /// Where the schemas were loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the number of loaded schemas, shared ones included.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Returns the names of all loaded schemas, sorted alphabetically.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// The raw schema for a category.
    pub fn schema(&self, category: Category) -> Result<&Value, SchemaError> {
        let name = category.schema_file();
        self.schemas.get(&name).ok_or_else(|| SchemaError::NotFound {
            name,
            origin: self.origin.clone(),
        })
    }

    /// The compiled validator for a category, compiling it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] if the category has no schema and
    /// [`SchemaError::Compile`] if the schema is not a valid JSON Schema.
    pub fn validator(&self, category: Category) -> Result<&Validator, SchemaError> {
        let slot = &self.compiled[category.index()];
        if let Some(validator) = slot.get() {
            return Ok(validator);
        }

        let schema = self.schema(category)?;
        let retriever = LocalSchemaRetriever {
            schemas_by_uri: self.schemas_by_uri.clone(),
        };
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .should_validate_formats(true)
            .with_retriever(retriever)
            .build(schema)
            .map_err(|e| SchemaError::Compile {
                name: category.schema_file(),
                reason: e.to_string(),
            })?;

        tracing::debug!(category = %category, origin = %self.origin, "compiled content schema");
        Ok(slot.get_or_init(|| validator))
    }

    /// Every violation of `instance` against the category schema, in one pass.
    ///
    /// An empty result means the document is valid.
    pub fn check(&self, category: Category, instance: &Value) -> Result<Vec<Violation>, SchemaError> {
        let validator = self.validator(category)?;
        Ok(validator
            .iter_errors(instance)
            .flat_map(|e| Violation::from_error(instance, &e))
            .collect())
    }

    /// Fill in declared defaults for absent optional properties.
    ///
    /// Walks nested objects, array items and `$ref`s to shared schemas.
    /// Call this only on a document that has already passed [`check`](Self::check).
    pub fn apply_defaults(&self, category: Category, instance: &mut Value) -> Result<(), SchemaError> {
        let schema = self.schema(category)?;
        self.fill_defaults(schema, instance);
        Ok(())
    }

    fn fill_defaults(&self, schema: &Value, instance: &mut Value) {
        let schema = self.resolve_ref(schema);

        if let (Some(properties), Some(object)) = (
            schema.get("properties").and_then(Value::as_object),
            instance.as_object_mut(),
        ) {
            let required: Vec<&str> = schema
                .get("required")
                .and_then(Value::as_array)
                .map(|r| r.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();

            for (name, property_schema) in properties {
                let property_schema = self.resolve_ref(property_schema);
                if !object.contains_key(name) && !required.contains(&name.as_str()) {
                    if let Some(default) = property_schema.get("default") {
                        object.insert(name.clone(), default.clone());
                    }
                }
                if let Some(child) = object.get_mut(name) {
                    self.fill_defaults(property_schema, child);
                }
            }
        }

        if let (Some(items_schema), Some(items)) = (schema.get("items"), instance.as_array_mut()) {
            for item in items {
                self.fill_defaults(items_schema, item);
            }
        }
    }

    /// Follow a `$ref` to another loaded schema, by `$id` or bare filename;
/// unknown refs resolve to `schema` itself.
    fn resolve_ref<'a>(&'a self, schema: &'a Value) -> &'a Value {
        schema
            .get("$ref")
            .and_then(Value::as_str)
            .and_then(|uri| lookup_uri(&self.schemas_by_uri, uri))
            .unwrap_or(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> &'static SchemaRegistry {
        SchemaRegistry::builtin().unwrap()
    }

    #[test]
    fn test_builtin_has_all_category_schemas() {
        let registry = registry();
        assert_eq!(registry.schema_count(), 5);
        for category in Category::all() {
            assert!(registry.schema(*category).is_ok(), "missing schema for {category}");
        }
        assert!(registry.schema_names().contains(&"technology.schema.json"));
    }

    #[test]
    fn test_builtin_is_process_wide() {
        let a = SchemaRegistry::builtin().unwrap() as *const SchemaRegistry;
        let b = SchemaRegistry::builtin().unwrap() as *const SchemaRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_validator_is_memoized() {
        let registry = registry();
        let first = registry.validator(Category::Skills).unwrap() as *const Validator;
        let second = registry.validator(Category::Skills).unwrap() as *const Validator;
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_category_schemas_compile() {
        let registry = registry();
        let mut failures = Vec::new();
        for category in Category::all() {
            if let Err(e) = registry.validator(*category) {
                failures.push(format!("{category}: {e}"));
            }
        }
        assert!(failures.is_empty(), "schemas failed to compile:\n{}", failures.join("\n"));
    }

    #[test]
    fn test_cross_ref_technology_is_enforced() {
        // skills.schema.json pulls Technology in by $ref.
        let doc = json!({
            "skills": [],
            "technologies": [
                { "name": "Rust", "category": "language", "proficiency": 9, "icon": "🦀" }
            ]
        });
        let violations = registry().check(Category::Skills, &doc).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field_path, "technologies[0].proficiency");
        assert_eq!(violations[0].constraint, "maximum");
    }

    #[test]
    fn test_missing_schema_is_not_found() {
        let registry = SchemaRegistry::from_values("empty", HashMap::new());
        let err = registry.validator(Category::Projects).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound { .. }), "got: {err}");
    }

    #[test]
    fn test_invalid_schema_is_compile_error() {
        let mut schemas = HashMap::new();
        schemas.insert("skills.schema.json".to_string(), json!({ "type": 12 }));
        let registry = SchemaRegistry::from_values("broken", schemas);
        let err = registry.validator(Category::Skills).unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }), "got: {err}");
    }

    #[test]
    fn test_invalid_schema_json_is_load_error() {
        let err = SchemaRegistry::from_documents(
            "inline",
            vec![("skills.schema.json".to_string(), "{ not json".to_string())],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Load { .. }), "got: {err}");
    }

    #[test]
    fn test_defaults_fill_absent_optional_arrays() {
        let mut doc = json!({ "experiences": [] });
        registry().apply_defaults(Category::Experience, &mut doc).unwrap();
        assert_eq!(doc["education"], json!([]));
        assert_eq!(doc["certifications"], json!([]));
    }

    #[test]
    fn test_defaults_keep_present_values() {
        let mut doc = json!({
            "experiences": [],
            "certifications": [
                { "id": "c1", "name": "Cert", "issuer": "Org", "duration": "2020" }
            ]
        });
        registry().apply_defaults(Category::Experience, &mut doc).unwrap();
        assert_eq!(doc["certifications"].as_array().unwrap().len(), 1);
        assert_eq!(doc["education"], json!([]));
    }

    #[test]
    fn test_defaults_never_fill_required_fields() {
        let mut schemas = HashMap::new();
        schemas.insert(
            "projects.schema.json".to_string(),
            json!({
                "type": "object",
                "required": ["projects"],
                "properties": { "projects": { "type": "array", "default": [] } }
            }),
        );
        let registry = SchemaRegistry::from_values("inline", schemas);
        let mut doc = json!({});
        registry.apply_defaults(Category::Projects, &mut doc).unwrap();
        assert!(doc.get("projects").is_none());
    }

    #[test]
    fn test_from_dir_loads_schema_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("skills.schema.json"), r#"{"type":"object"}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let registry = SchemaRegistry::from_dir(dir.path()).unwrap();
        assert_eq!(registry.schema_names(), vec!["skills.schema.json"]);
        assert!(registry.check(Category::Skills, &json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_from_dir_nonexistent() {
        let err = SchemaRegistry::from_dir("/nonexistent/folio/schemas").unwrap_err();
        assert!(matches!(err, SchemaError::Load { .. }));
    }

    #[test]
    fn test_defaults_follow_relative_refs() {
        let mut schemas = HashMap::new();
        schemas.insert(
            Category::Skills.schema_file(),
            json!({
                "type": "object",
                "properties": { "extra": { "$ref": "shared.schema.json" } }
            }),
        );
        schemas.insert(
            "shared.schema.json".to_string(),
            json!({
                "type": "object",
                "properties": { "tags": { "type": "array", "default": [] } }
            }),
        );
        let registry = SchemaRegistry::from_values("relative refs", schemas);

        let mut doc = json!({ "extra": {} });
        assert!(registry.check(Category::Skills, &doc).unwrap().is_empty());
        registry.apply_defaults(Category::Skills, &mut doc).unwrap();
        assert_eq!(doc, json!({ "extra": { "tags": [] } }));
    }
}
