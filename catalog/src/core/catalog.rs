//! Catalog construction, freeze lifecycle, and read-only queries.
//!
//! A [`Catalog`] has exactly two lifecycle states: Building and Frozen, with a
//! single one-way [`Catalog::freeze`] transition. All mutation happens before
//! the freeze; afterwards the catalog is read-only for the rest of the process
//! and can be shared by reference across any number of readers.
//!
//! Ordering is insertion order throughout. It is display priority, not a
//! ranking.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::types::{Category, CatalogError};

/// A named shape of conditional logic and its documented substitutes.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Pattern {
    /// Unique slug identifier (e.g. `if-else`).
    pub id: String,
    /// Human-readable name (e.g. `If / else`).
    pub name: String,
    pub category: Category,
    /// Canonical "before" snippets showing the shape being replaced.
    pub before: Vec<String>,
    /// Substitute implementations, in display order.
    pub alternatives: Vec<Alternative>,
}

/// A documented substitute implementation for one pattern.
///
/// An alternative belongs to exactly one [`Pattern`], which owns it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Alternative {
    /// Slug name unique within the owning pattern (e.g. `ternary-assignment`).
    pub name: String,
    /// Why and when this rewrite applies.
    pub rationale: String,
    /// The "after" form replacing the pattern's snippet.
    pub after: String,
}

/// Minimal pattern metadata for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
}

/// The catalog: insertion-ordered patterns plus an id index.
///
/// Lookups go through the index with explicit presence checks; a missing id is
/// a [`CatalogError::NotFound`], never a silent default.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    index: HashMap<String, usize>,
    frozen: bool,
}

impl Catalog {
    /// Create an empty catalog in the Building state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern at the end of the catalog order.
    ///
    /// Fails with [`CatalogError::InvalidState`] after [`Catalog::freeze`] and
    /// with [`CatalogError::DuplicatePattern`] when the id is already present.
    /// A rejected insertion leaves the catalog unchanged.
    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<(), CatalogError> {
        if self.frozen {
            return Err(CatalogError::InvalidState { op: "add_pattern" });
        }
        if self.index.contains_key(&pattern.id) {
            return Err(CatalogError::DuplicatePattern { id: pattern.id });
        }
        self.index.insert(pattern.id.clone(), self.patterns.len());
        self.patterns.push(pattern);
        Ok(())
    }

    /// Append an alternative to an existing pattern.
    ///
    /// Fails with [`CatalogError::InvalidState`] after [`Catalog::freeze`] and
    /// with [`CatalogError::NotFound`] for an unknown pattern id.
    pub fn add_alternative(
        &mut self,
        pattern_id: &str,
        alternative: Alternative,
    ) -> Result<(), CatalogError> {
        if self.frozen {
            return Err(CatalogError::InvalidState {
                op: "add_alternative",
            });
        }
        let slot = self.slot(pattern_id)?;
        self.patterns[slot].alternatives.push(alternative);
        Ok(())
    }

    /// One-way Building -> Frozen transition. Idempotent.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Pattern ids and names in catalog order.
    pub fn list_patterns(&self) -> Vec<PatternSummary> {
        self.patterns
            .iter()
            .map(|pattern| PatternSummary {
                id: pattern.id.clone(),
                name: pattern.name.clone(),
                category: pattern.category,
            })
            .collect()
    }

    /// Look up a pattern by id.
    pub fn get(&self, pattern_id: &str) -> Result<&Pattern, CatalogError> {
        let slot = self.slot(pattern_id)?;
        Ok(&self.patterns[slot])
    }

    /// A pattern's alternatives in insertion order.
    pub fn get_alternatives(&self, pattern_id: &str) -> Result<&[Alternative], CatalogError> {
        self.get(pattern_id)
            .map(|pattern| pattern.alternatives.as_slice())
    }

    /// Iterate patterns in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn slot(&self, pattern_id: &str) -> Result<usize, CatalogError> {
        self.index
            .get(pattern_id)
            .copied()
            .ok_or_else(|| CatalogError::NotFound {
                id: pattern_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{alternative, pattern};

    #[test]
    fn get_alternatives_returns_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add_pattern(pattern("if-else")).expect("add pattern");
        catalog
            .add_alternative("if-else", alternative("ternary-assignment"))
            .expect("add first");
        catalog
            .add_alternative("if-else", alternative("functional-ternary"))
            .expect("add second");
        catalog.freeze();

        let names: Vec<&str> = catalog
            .get_alternatives("if-else")
            .expect("alternatives")
            .iter()
            .map(|alt| alt.name.as_str())
            .collect();
        assert_eq!(names, vec!["ternary-assignment", "functional-ternary"]);
    }

    #[test]
    fn get_alternatives_unknown_id_is_not_found() {
        let mut catalog = Catalog::new();
        catalog.add_pattern(pattern("if-else")).expect("add pattern");
        catalog.freeze();

        let err = catalog.get_alternatives("switch-case").unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                id: "switch-case".to_string()
            }
        );
    }

    #[test]
    fn mutation_after_freeze_is_invalid_state_and_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.add_pattern(pattern("if-else")).expect("add pattern");
        catalog.freeze();

        let err = catalog.add_pattern(pattern("switch-case")).unwrap_err();
        assert_eq!(err, CatalogError::InvalidState { op: "add_pattern" });

        let err = catalog
            .add_alternative("if-else", alternative("ternary-assignment"))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidState {
                op: "add_alternative"
            }
        );

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get_alternatives("if-else").expect("get").is_empty());
    }

    #[test]
    fn duplicate_id_is_rejected_and_keeps_prior_entry() {
        let mut catalog = Catalog::new();
        let mut first = pattern("if-else");
        first.name = "original".to_string();
        catalog.add_pattern(first).expect("add pattern");

        let mut second = pattern("if-else");
        second.name = "overwrite attempt".to_string();
        let err = catalog.add_pattern(second).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicatePattern {
                id: "if-else".to_string()
            }
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("if-else").expect("get").name, "original");
    }

    #[test]
    fn add_alternative_unknown_pattern_is_not_found() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_alternative("nested-if", alternative("guard-clauses"))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                id: "nested-if".to_string()
            }
        );
    }

    #[test]
    fn list_patterns_length_and_order_match_insertions() {
        let mut catalog = Catalog::new();
        for id in ["basic-if", "if-else", "nested-if"] {
            catalog.add_pattern(pattern(id)).expect("add pattern");
        }
        catalog.freeze();

        let ids: Vec<String> = catalog
            .list_patterns()
            .into_iter()
            .map(|summary| summary.id)
            .collect();
        assert_eq!(ids, vec!["basic-if", "if-else", "nested-if"]);
    }

    #[test]
    fn freeze_is_idempotent() {
        let mut catalog = Catalog::new();
        catalog.freeze();
        catalog.freeze();
        assert!(catalog.is_frozen());
        assert!(catalog.is_empty());
    }
}
