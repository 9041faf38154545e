//! Semantic invariants not enforced by the data-file document types.
//!
//! Duplicate pattern ids are rejected at insertion by
//! [`crate::core::catalog::Catalog::add_pattern`]; everything checked here is
//! about the content of entries that deserialization alone accepts.

use std::collections::HashSet;

use crate::core::catalog::Catalog;

/// Check semantic invariants over a built catalog:
/// - Pattern ids and alternative names are slugs (`[a-z0-9_-]+`)
/// - Names, rationales, and snippets are non-empty
/// - Alternative names are unique within their pattern
///
/// Returns stable error messages in catalog order.
pub fn validate_invariants(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();
    for pattern in catalog.iter() {
        if let Err(reason) = check_slug(&pattern.id) {
            errors.push(format!("pattern id '{}' {}", pattern.id, reason));
        }
        if pattern.name.trim().is_empty() {
            errors.push(format!("{}: name must be non-empty", pattern.id));
        }
        for (index, snippet) in pattern.before.iter().enumerate() {
            if snippet.trim().is_empty() {
                errors.push(format!("{}: before[{}] must be non-empty", pattern.id, index));
            }
        }

        let mut seen = HashSet::new();
        for alternative in &pattern.alternatives {
            let label = format!("{}/{}", pattern.id, alternative.name);
            if !seen.insert(alternative.name.as_str()) {
                errors.push(format!("duplicate alternative '{}'", label));
            }
            if let Err(reason) = check_slug(&alternative.name) {
                errors.push(format!("alternative name '{}' {}", label, reason));
            }
            if alternative.rationale.trim().is_empty() {
                errors.push(format!("{}: rationale must be non-empty", label));
            }
            if alternative.after.trim().is_empty() {
                errors.push(format!("{}: after snippet must be non-empty", label));
            }
        }
    }
    errors
}

/// Slug rule shared by pattern ids and alternative names.
fn check_slug(id: &str) -> Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("must be non-empty");
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err("must match [a-z0-9_-]+");
    }
    Ok(())
}
