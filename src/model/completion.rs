use std::collections::HashSet;

use super::catalog::Catalog;

/// The set of completed item ids.
///
/// Hydrated once from a snapshot at startup, mutated only through
/// `toggle`/`set_all`, never by rendering code. Ids from an older catalog
/// version are tolerated in the set (they round-trip through persistence)
/// but are simply never counted by stats, since stats walk the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    done: HashSet<String>,
}

impl Completion {
    /// Hydrate from persisted ids. No catalog filtering here: stale ids
    /// must survive a load → save round trip.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Completion {
            done: ids.into_iter().collect(),
        }
    }

    /// Flip completion of one item. Ids unknown to the catalog are ignored.
    /// Returns whether the set changed.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains_id(id) {
            tracing::debug!(id, "toggle for unknown item id ignored");
            return false;
        }
        if !self.done.remove(id) {
            self.done.insert(id.to_string());
        }
        true
    }

    /// Replace the whole set. Ids unknown to the catalog are dropped.
    pub fn set_all<I>(&mut self, catalog: &Catalog, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.done = ids
            .into_iter()
            .filter(|id| {
                let known = catalog.contains_id(id);
                if !known {
                    tracing::debug!(%id, "unknown item id dropped from set_all");
                }
                known
            })
            .collect();
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.done.contains(id)
    }

    /// Read-only copy for persistence, sorted so identical sets always
    /// serialize to identical bytes.
    pub fn snapshot(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.done.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_entries([("Math", "Ch1"), ("Math", "Ch2"), ("Sci", "Ch1")])
    }

    #[test]
    fn toggle_flips_membership() {
        let catalog = catalog();
        let mut completion = Completion::default();
        assert!(completion.toggle(&catalog, "Math::Ch1"));
        assert!(completion.is_complete("Math::Ch1"));
        assert!(completion.toggle(&catalog, "Math::Ch1"));
        assert!(!completion.is_complete("Math::Ch1"));
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let catalog = catalog();
        let mut completion = Completion::default();
        assert!(!completion.toggle(&catalog, "Math::Ch9"));
        assert!(completion.is_empty());
    }

    #[test]
    fn snapshot_is_sorted() {
        let catalog = catalog();
        let mut completion = Completion::default();
        completion.toggle(&catalog, "Sci::Ch1");
        completion.toggle(&catalog, "Math::Ch1");
        assert_eq!(completion.snapshot(), vec!["Math::Ch1", "Sci::Ch1"]);
    }

    #[test]
    fn stale_ids_survive_hydration() {
        let completion = Completion::from_ids(vec!["Old::Gone".to_string()]);
        assert!(completion.is_complete("Old::Gone"));
        assert_eq!(completion.snapshot(), vec!["Old::Gone"]);
    }

    #[test]
    fn set_all_drops_unknown_ids() {
        let catalog = catalog();
        let mut completion = Completion::default();
        completion.set_all(
            &catalog,
            vec!["Math::Ch1".to_string(), "Old::Gone".to_string()],
        );
        assert!(completion.is_complete("Math::Ch1"));
        assert!(!completion.is_complete("Old::Gone"));
        assert_eq!(completion.len(), 1);
    }
}
