use std::collections::HashSet;

use indexmap::IndexMap;

/// A single checklist entry (one chapter of a subject)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier derived from subject and label
    pub id: String,
    /// The subject (group) this chapter belongs to
    pub subject: String,
    /// The chapter title as supplied by the catalog source
    pub label: String,
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive a stable item id from subject and raw label text.
///
/// The label's whitespace is collapsed so the same content produces the
/// same id no matter how the source text was wrapped. Case is preserved.
pub fn item_id(subject: &str, label: &str) -> String {
    format!("{}::{}", subject, collapse_ws(label))
}

/// Immutable snapshot of all checklist items, grouped by subject in
/// first-seen order. Built once at startup; the engine never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    /// subject → indices into `items`, keyed in first-seen subject order
    groups: IndexMap<String, Vec<usize>>,
    ids: HashSet<String>,
}

impl Catalog {
    /// Build a catalog from an ordered sequence of (subject, label) pairs.
    ///
    /// The caller is expected to supply a de-duplicated sequence; if two
    /// entries derive the same id, the first occurrence wins.
    pub fn from_entries<I, S, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        let mut catalog = Catalog::default();
        for (subject, label) in entries {
            let subject = subject.into();
            let label = label.into();
            let id = item_id(&subject, &label);
            if !catalog.ids.insert(id.clone()) {
                tracing::debug!(%id, "duplicate catalog entry skipped");
                continue;
            }
            let index = catalog.items.len();
            catalog
                .groups
                .entry(subject.clone())
                .or_default()
                .push(index);
            catalog.items.push(Item { id, subject, label });
        }
        catalog
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with this id exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether any item belongs to this subject.
    pub fn contains_subject(&self, subject: &str) -> bool {
        self.groups.contains_key(subject)
    }

    /// Subjects in natural (first-seen) order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Items belonging to one subject, in catalog order.
    pub fn group_items(&self, subject: &str) -> impl Iterator<Item = &Item> {
        self.groups
            .get(subject)
            .into_iter()
            .flatten()
            .map(|&i| &self.items[i])
    }
}
