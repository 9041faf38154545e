//! Test-only helpers for constructing catalog entities.

use crate::core::catalog::{Alternative, Catalog, Pattern};
use crate::core::types::Category;

/// Create a deterministic pattern with one before snippet and no alternatives.
pub fn pattern(id: &str) -> Pattern {
    Pattern {
        id: id.to_string(),
        name: format!("{} pattern", id),
        category: Category::Basic,
        before: vec![format!("if (check) {{ handle(\"{}\"); }}", id)],
        alternatives: Vec::new(),
    }
}

/// Create a deterministic pattern in an explicit category.
pub fn pattern_in(id: &str, category: Category) -> Pattern {
    let mut pattern = pattern(id);
    pattern.category = category;
    pattern
}

/// Create a deterministic alternative.
pub fn alternative(name: &str) -> Alternative {
    Alternative {
        name: name.to_string(),
        rationale: format!("{} rationale", name),
        after: format!("{}(value);", name.replace('-', "_")),
    }
}

/// Build and freeze a catalog holding the given pattern ids, in order.
pub fn frozen_catalog(ids: &[&str]) -> Catalog {
    let mut catalog = Catalog::new();
    for id in ids {
        catalog.add_pattern(pattern(id)).expect("add pattern");
    }
    catalog.freeze();
    catalog
}

/// Minimal well-formed catalog data file contents.
pub fn sample_data_toml() -> &'static str {
    r#"
[[patterns]]
id = "if-else"
name = "If / else"
category = "basic"
before = ["if (a) { x = 1; } else { x = 2; }"]

[[patterns.alternatives]]
name = "ternary-assignment"
rationale = "Single expression instead of a statement."
after = "const x = a ? 1 : 2;"
"#
}

/// Write catalog data to a temp dir and return the dir with the file path.
///
/// The directory guard must be kept alive for the duration of the test.
#[cfg(feature = "test-support")]
pub fn temp_data_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("patterns.toml");
    std::fs::write(&path, contents).expect("write data file");
    (dir, path)
}
