use indexmap::IndexMap;
use serde::Serialize;

use crate::model::Catalog;

/// Lowercase, trim, and collapse internal whitespace for comparison.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Per-group match information and a total presentation order, derived
/// from one query against the catalog. Derived state — never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The normalized query this result was computed from
    pub query: String,
    /// subject → number of matching items, every catalog subject present
    pub match_counts: IndexMap<String, usize>,
    /// Subjects ranked by match count descending, catalog order on ties
    pub group_order: Vec<String>,
}

impl SearchResult {
    pub fn match_count(&self, subject: &str) -> usize {
        self.match_counts.get(subject).copied().unwrap_or(0)
    }

    pub fn has_match(&self, subject: &str) -> bool {
        self.match_count(subject) > 0
    }

    /// First matching group in ranked order — the auto-selection target,
    /// and where Enter moves focus in the UI.
    pub fn first_match(&self) -> Option<&str> {
        self.matching_groups().next()
    }

    /// Matching groups in ranked order.
    pub fn matching_groups(&self) -> impl Iterator<Item = &str> {
        self.group_order
            .iter()
            .map(String::as_str)
            .filter(|g| self.has_match(g))
    }
}

/// Rank catalog groups against a query.
///
/// An item matches iff its normalized label contains the normalized query
/// as a substring; the subject name itself is not searched. An empty (or
/// whitespace-only) query matches everything and yields the catalog's
/// natural order, so searching and then clearing restores the original
/// order exactly. Pure and deterministic: identical inputs always produce
/// the identical order.
pub fn compute(catalog: &Catalog, query: &str) -> SearchResult {
    let query = normalize(query);
    let mut result = SearchResult {
        query: query.clone(),
        ..Default::default()
    };

    for subject in catalog.subjects() {
        let count = catalog
            .group_items(subject)
            .filter(|item| query.is_empty() || normalize(&item.label).contains(query.as_str()))
            .count();
        result.match_counts.insert(subject.to_string(), count);
    }

    let mut order: Vec<String> = result.match_counts.keys().cloned().collect();
    if !query.is_empty() {
        // stable sort: ties keep catalog order
        order.sort_by_key(|subject| std::cmp::Reverse(result.match_count(subject)));
    }
    result.group_order = order;
    result
}
