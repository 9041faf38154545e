//! Guide rendering from catalog data.
//!
//! Loads the MiniJinja template from templates/ at runtime, enabling template
//! iteration without recompilation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use catalog::core::catalog::Catalog;
use catalog::core::types::Category;
use minijinja::{Environment, context};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// One guide section: a category with its patterns in catalog order.
#[derive(Debug, Clone, Serialize)]
struct SectionContext {
    title: &'static str,
    patterns: Vec<PatternContext>,
}

#[derive(Debug, Clone, Serialize)]
struct PatternContext {
    id: String,
    name: String,
    before: Vec<String>,
    alternatives: Vec<AlternativeContext>,
}

#[derive(Debug, Clone, Serialize)]
struct AlternativeContext {
    name: String,
    rationale: String,
    after: String,
}

/// Fixed section order for the rendered guide.
const SECTION_ORDER: &[(Category, &str)] = &[
    (Category::Basic, "Basic conditionals"),
    (Category::MultiBranch, "Multi-branch conditionals"),
    (Category::Nested, "Nested conditionals"),
    (Category::Incongruent, "Incongruent branches"),
];

/// Render the guide template with the full catalog.
pub fn render_guide(template_path: &Path, catalog: &Catalog) -> Result<String> {
    let template_content = fs::read_to_string(template_path)
        .with_context(|| format!("read template {}", template_path.display()))?;

    let mut env = Environment::new();
    env.add_template("guide", &template_content)
        .context("parse template")?;
    let template = env.get_template("guide")?;

    let rendered = template.render(context! {
        sections => sections(catalog),
    })?;
    Ok(rendered)
}

/// Group patterns into sections, keeping catalog order within each section.
///
/// Empty sections are dropped so the guide never renders a bare heading.
fn sections(catalog: &Catalog) -> Vec<SectionContext> {
    SECTION_ORDER
        .iter()
        .map(|(category, title)| SectionContext {
            title,
            patterns: catalog
                .iter()
                .filter(|pattern| pattern.category == *category)
                .map(|pattern| PatternContext {
                    id: pattern.id.clone(),
                    name: pattern.name.clone(),
                    before: pattern.before.clone(),
                    alternatives: pattern
                        .alternatives
                        .iter()
                        .map(|alt| AlternativeContext {
                            name: alt.name.clone(),
                            rationale: alt.rationale.clone(),
                            after: alt.after.clone(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .filter(|section| !section.patterns.is_empty())
        .collect()
}

/// Compute a short hash of content for staleness checks.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8]) // 16 hex chars
}
