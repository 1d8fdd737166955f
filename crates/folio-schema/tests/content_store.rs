//! Integration tests: the shipped reference content and the content-store
//! contract, checked through the public API only.

use folio_core::{Category, ProjectCategory};
use folio_schema::{
    ContentError, ContentStore, DirectorySource, MemorySource, SchemaRegistry,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn builtin() -> &'static SchemaRegistry {
    SchemaRegistry::builtin().expect("builtin schemas load")
}

fn valid_personal_info() -> Value {
    json!({
        "name": "Test Name",
        "title": "Test Title",
        "contact": { "email": "test@example.com" },
        "socialLinks": [
            { "name": "LinkedIn", "url": "https://linkedin.com/test", "icon": "linkedin" }
        ]
    })
}

fn validate(category: Category, doc: &Value) -> Result<(), ContentError> {
    ContentStore::new(MemorySource::new(), builtin()).validate(category, doc)
}

fn violation_paths(err: &ContentError) -> Vec<(String, String)> {
    err.as_validation()
        .expect("expected a validation error")
        .violations
        .violations()
        .iter()
        .map(|v| (v.field_path.clone(), v.constraint.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Shipped content
// ---------------------------------------------------------------------------

#[test]
fn test_shipped_content_loads_from_disk() {
    let root = repo_root();
    let schemas = SchemaRegistry::from_dir(root.join("schemas")).expect("schemas load");
    let store = ContentStore::new(DirectorySource::new(root.join("content")), &schemas);

    for category in Category::all() {
        if let Err(e) = store.load(*category) {
            panic!("{category} failed to load: {e}");
        }
    }
}

#[test]
fn test_shipped_typed_accessors() {
    let store = ContentStore::embedded().unwrap();

    let info = store.personal_info().unwrap();
    assert!(!info.name.is_empty());
    assert!(!info.social_links.is_empty());

    let skills = store.skills().unwrap();
    assert!(!skills.skills.is_empty());
    assert!(!skills.technologies.is_empty());

    let history = store.experience().unwrap();
    assert!(!history.experiences.is_empty());
    // The shipped experience file omits certifications entirely.
    assert!(history.certifications.is_empty());

    let catalog = store.projects().unwrap();
    assert!(catalog.featured().count() >= 1);
}

#[test]
fn test_shipped_ratings_within_range() {
    let store = ContentStore::embedded().unwrap();
    let skills = store.skills().unwrap();
    for skill in &skills.skills {
        assert!((1..=5).contains(&skill.level), "{} has level {}", skill.name, skill.level);
    }
    for tech in &skills.technologies {
        assert!(
            (1..=5).contains(&tech.proficiency),
            "{} has proficiency {}",
            tech.name,
            tech.proficiency
        );
    }
}

#[test]
fn test_shipped_project_categories_are_declared() {
    let catalog = ContentStore::embedded().unwrap().projects().unwrap();
    for project in &catalog.projects {
        assert!(ProjectCategory::all().contains(&project.category));
    }
}

// ---------------------------------------------------------------------------
// Personal info contract
// ---------------------------------------------------------------------------

#[test]
fn test_valid_personal_info_passes() {
    validate(Category::PersonalInfo, &valid_personal_info()).unwrap();
}

#[test]
fn test_missing_contact_reports_contact() {
    let mut doc = valid_personal_info();
    doc.as_object_mut().unwrap().remove("contact");

    let err = validate(Category::PersonalInfo, &doc).unwrap_err();
    let validation = err.as_validation().unwrap();
    assert_eq!(validation.category, Category::PersonalInfo);
    let contact: Vec<_> = validation.violations.at("contact").collect();
    assert_eq!(contact.len(), 1);
    assert_eq!(contact[0].constraint, "required");
    assert!(contact[0].actual.is_none());
}

#[test]
fn test_bad_email_is_format_violation() {
    let mut doc = valid_personal_info();
    doc["contact"]["email"] = json!("not-an-email");

    let err = validate(Category::PersonalInfo, &doc).unwrap_err();
    assert_eq!(
        violation_paths(&err),
        vec![("contact.email".to_string(), "format".to_string())]
    );
    let v = &err.as_validation().unwrap().violations.violations()[0];
    assert_eq!(v.actual, Some(json!("not-an-email")));
    assert!(v.expected.contains("email"));
}

#[test]
fn test_short_email_passes() {
    let mut doc = valid_personal_info();
    doc["contact"]["email"] = json!("a@b.com");
    validate(Category::PersonalInfo, &doc).unwrap();
}

#[test]
fn test_only_name_reports_every_missing_field() {
    let err = validate(Category::PersonalInfo, &json!({ "name": "Test" })).unwrap_err();
    let mut paths: Vec<String> = violation_paths(&err).into_iter().map(|(p, _)| p).collect();
    paths.sort();
    assert_eq!(paths, vec!["contact", "socialLinks", "title"]);
}

#[test]
fn test_undeclared_fields_reported_individually() {
    let mut doc = valid_personal_info();
    doc["website"] = json!("https://example.com");
    doc["age"] = json!(30);
    let err = validate(Category::PersonalInfo, &doc).unwrap_err();
    let mut paths = violation_paths(&err);
    paths.sort();
    assert_eq!(
        paths,
        vec![
            ("age".to_string(), "additionalProperties".to_string()),
            ("website".to_string(), "additionalProperties".to_string()),
        ]
    );
}

// ---------------------------------------------------------------------------
// Skills, experience, projects
// ---------------------------------------------------------------------------

#[test]
fn test_valid_skills_pass() {
    let doc = json!({
        "skills": [ { "name": "Test Skill", "level": 5, "category": "technical" } ],
        "technologies": [
            { "name": "Test Tech", "category": "language", "proficiency": 4, "icon": "🔧" }
        ]
    });
    validate(Category::Skills, &doc).unwrap();
}

#[test]
fn test_unknown_project_category_fails() {
    let mut doc = ContentStore::embedded().unwrap().load(Category::Projects).unwrap();
    doc["projects"][1]["category"] = json!("games");

    let err = validate(Category::Projects, &doc).unwrap_err();
    assert_eq!(
        violation_paths(&err),
        vec![("projects[1].category".to_string(), "enum".to_string())]
    );
}

#[test]
fn test_every_violation_is_reported() {
    let doc = json!({
        "skills": [
            { "name": "A", "level": 0, "category": "technical" },
            { "name": "B", "level": 6, "category": "hobby" }
        ],
        "technologies": [
            { "name": "C", "category": "language", "proficiency": 7, "icon": "x" }
        ]
    });
    let err = validate(Category::Skills, &doc).unwrap_err();
    let mut paths = violation_paths(&err);
    paths.sort();
    assert_eq!(
        paths,
        vec![
            ("skills[0].level".to_string(), "minimum".to_string()),
            ("skills[1].category".to_string(), "enum".to_string()),
            ("skills[1].level".to_string(), "maximum".to_string()),
            ("technologies[0].proficiency".to_string(), "maximum".to_string()),
        ]
    );
}

#[test]
fn test_present_but_invalid_optional_array_is_rejected() {
    // Defaults only cover absence; a wrong type is still a violation.
    let doc = json!({ "experiences": [], "education": "none" });
    let err = validate(Category::Experience, &doc).unwrap_err();
    assert_eq!(
        violation_paths(&err),
        vec![("education".to_string(), "type".to_string())]
    );
}

#[test]
fn test_negative_metric_rejected() {
    let mut doc = ContentStore::embedded().unwrap().load(Category::Projects).unwrap();
    doc["projects"][0]["metrics"]["stars"] = json!(-1);
    let err = validate(Category::Projects, &doc).unwrap_err();
    assert_eq!(
        violation_paths(&err),
        vec![("projects[0].metrics.stars".to_string(), "minimum".to_string())]
    );
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn test_typed_records_revalidate_cleanly() {
    let store = ContentStore::embedded().unwrap();

    let docs = [
        (Category::PersonalInfo, serde_json::to_value(store.personal_info().unwrap()).unwrap()),
        (Category::Skills, serde_json::to_value(store.skills().unwrap()).unwrap()),
        (Category::Experience, serde_json::to_value(store.experience().unwrap()).unwrap()),
        (Category::Projects, serde_json::to_value(store.projects().unwrap()).unwrap()),
    ];

    for (category, doc) in &docs {
        if let Err(e) = store.validate(*category, doc) {
            panic!("{category} round trip introduced violations: {e}");
        }
    }
}

#[test]
fn test_validation_is_idempotent() {
    let store = ContentStore::embedded().unwrap();
    let loaded = store.load(Category::Experience).unwrap();
    store.validate(Category::Experience, &loaded).unwrap();
    assert_eq!(store.load(Category::Experience).unwrap(), loaded);
}

// ---------------------------------------------------------------------------
// Rating ranges
// ---------------------------------------------------------------------------

fn skills_with_level(level: i64) -> Value {
    json!({
        "skills": [ { "name": "S", "level": level, "category": "soft" } ],
        "technologies": []
    })
}

fn skills_with_proficiency(proficiency: i64) -> Value {
    json!({
        "skills": [],
        "technologies": [
            { "name": "T", "category": "tool", "proficiency": proficiency, "icon": "t" }
        ]
    })
}

proptest! {
    #[test]
    fn prop_level_accepted_iff_in_range(level in -20i64..20) {
        let result = validate(Category::Skills, &skills_with_level(level));
        prop_assert_eq!(result.is_ok(), (1..=5).contains(&level));
    }

    #[test]
    fn prop_proficiency_accepted_iff_in_range(proficiency in -20i64..20) {
        let result = validate(Category::Skills, &skills_with_proficiency(proficiency));
        prop_assert_eq!(result.is_ok(), (1..=5).contains(&proficiency));
    }

    #[test]
    fn prop_project_category_must_be_declared(category in "[a-z-]{1,16}") {
        let declared = ProjectCategory::all().iter().any(|c| c.as_str() == category);
        let doc = json!({
            "projects": [{
                "id": "p",
                "title": "P",
                "description": "d",
                "longDescription": "ld",
                "technologies": [],
                "images": [],
                "featured": false,
                "category": category
            }]
        });
        prop_assert_eq!(validate(Category::Projects, &doc).is_ok(), declared);
    }
}
