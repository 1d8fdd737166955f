//! # Project Template Subcommand
//!
//! Prints a project record that passes the projects schema, as a starting
//! point for adding a new entry to `projects.json`.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

/// Arguments for the `folio project-template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {}

/// A placeholder project with every field filled in.
pub fn project_template() -> Value {
    json!({
        "id": "unique-project-id",
        "title": "Your Project Title",
        "description": "Short description",
        "longDescription": "Detailed description",
        "technologies": [
            {
                "name": "Technology Name",
                "category": "language",
                "proficiency": 5,
                "icon": "🔧"
            }
        ],
        "images": ["/projects/your-project-1.jpg"],
        "githubUrl": "https://github.com/username/repo",
        "demoUrl": "https://your-demo.example.com",
        "featured": true,
        "category": "web-development",
        "metrics": {
            "stars": 0,
            "forks": 0,
            "users": 0
        }
    })
}

/// Execute the project-template subcommand.
pub fn run_template(_args: &TemplateArgs, out: &mut dyn Write) -> Result<u8> {
    writeln!(out, "Add this to the \"projects\" array in projects.json and edit it:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&project_template())?)?;
    writeln!(out, "technology categories: language | framework | tool | platform")?;
    writeln!(
        out,
        "project categories: ai-ml | web-development | data-science | automation | research"
    )?;
    Ok(0)
}
