//! Catalog data file parsing and validation.
//!
//! Catalog data is TOML: an ordered `[[patterns]]` list, each entry carrying
//! inline `[[patterns.alternatives]]` tables. The file is intended to be
//! edited by humans; everything deserialization alone cannot reject is caught
//! by `core::invariants` before the catalog is handed out. See
//! `data/patterns.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::core::catalog::{Alternative, Catalog, Pattern};
use crate::core::invariants::validate_invariants;
use crate::core::types::Category;

/// Catalog data shipped with the binaries.
const BUILTIN_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/patterns.toml"
));

/// A parsed catalog data file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogFile {
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
}

/// One `[[patterns]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PatternEntry {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub before: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeEntry>,
}

/// One `[[patterns.alternatives]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AlternativeEntry {
    pub name: String,
    pub rationale: String,
    pub after: String,
}

/// Load, validate, and freeze a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    parse_catalog(&contents).with_context(|| format!("build catalog {}", path.display()))
}

/// The catalog shipped with the binaries, validated and frozen.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_DATA).context("build builtin catalog")
}

/// Parse catalog data, build it through the construction ops, run invariant
/// checks, and return the catalog frozen.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(contents).context("parse catalog toml")?;
    let mut catalog = Catalog::new();
    for entry in file.patterns {
        let pattern = Pattern {
            id: entry.id,
            name: entry.name,
            category: entry.category,
            before: entry.before,
            alternatives: Vec::new(),
        };
        let id = pattern.id.clone();
        catalog
            .add_pattern(pattern)
            .with_context(|| format!("insert pattern '{}'", id))?;
        for alternative in entry.alternatives {
            catalog
                .add_alternative(
                    &id,
                    Alternative {
                        name: alternative.name,
                        rationale: alternative.rationale,
                        after: alternative.after,
                    },
                )
                .with_context(|| format!("insert alternatives of '{}'", id))?;
        }
    }

    let errors = validate_invariants(&catalog);
    if !errors.is_empty() {
        bail!("catalog invariants failed:\n- {}", errors.join("\n- "));
    }

    catalog.freeze();
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_data_toml;

    #[test]
    fn parse_returns_frozen_catalog() {
        let catalog = parse_catalog(sample_data_toml()).expect("parse");
        assert!(catalog.is_frozen());
        assert_eq!(catalog.len(), 1);
        let names: Vec<&str> = catalog
            .get_alternatives("if-else")
            .expect("alternatives")
            .iter()
            .map(|alt| alt.name.as_str())
            .collect();
        assert_eq!(names, vec!["ternary-assignment"]);
    }

    #[test]
    fn duplicate_pattern_id_fails_to_build() {
        let contents = r#"
[[patterns]]
id = "if-else"
name = "If / else"
category = "basic"

[[patterns]]
id = "if-else"
name = "If / else again"
category = "basic"
"#;
        let err = parse_catalog(contents).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate pattern id 'if-else'"));
    }

    #[test]
    fn invariant_violations_fail_to_build() {
        let contents = r#"
[[patterns]]
id = "If Else"
name = "If / else"
category = "basic"
"#;
        let err = parse_catalog(contents).unwrap_err();
        assert!(format!("{:#}", err).contains("catalog invariants failed"));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let contents = r#"
[[patterns]]
id = "if-else"
name = "If / else"
category = "branchy"
"#;
        let err = parse_catalog(contents).unwrap_err();
        assert!(format!("{:#}", err).contains("parse catalog toml"));
    }

    #[test]
    fn load_catalog_reads_from_disk() {
        let (_dir, path) = crate::test_support::temp_data_file(sample_data_toml());
        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_catalog(Path::new("no/such/patterns.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("no/such/patterns.toml"));
    }
}
