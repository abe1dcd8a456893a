use crate::ops::search::SearchResult;

/// Cross-view selection state: a transient hover slot and a persistent
/// click slot, combined by one read-time precedence rule.
///
/// Two independently-set options rather than a single enum: hover must
/// never be lost by persistent-selection bookkeeping, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    hover: Option<String>,
    selected: Option<String>,
}

impl Selection {
    pub fn hover_enter(&mut self, subject: &str) {
        self.hover = Some(subject.to_string());
    }

    /// Clears hover only if it still names `subject`, so a stale leave
    /// event arriving after a rapid re-entry cannot wipe the newer hover.
    pub fn hover_leave(&mut self, subject: &str) {
        if self.hover.as_deref() == Some(subject) {
            self.hover = None;
        }
    }

    /// Persistent selection; survives until another click or a search
    /// transition replaces it.
    pub fn click(&mut self, subject: &str) {
        self.selected = Some(subject.to_string());
    }

    /// Search drives the persistent slot: clearing the query clears it,
    /// otherwise the top-ranked matching group becomes selected (covers
    /// both the single-match and multi-match cases). Hover is untouched.
    pub fn search_changed(&mut self, result: &SearchResult) {
        if result.query.is_empty() {
            self.selected = None;
        } else {
            self.selected = result.first_match().map(str::to_string);
        }
    }

    /// A group was expanded or collapsed: opening selects it, closing
    /// deselects only if it was the selected one.
    pub fn group_toggled(&mut self, subject: &str, open: bool) {
        if open {
            self.selected = Some(subject.to_string());
        } else if self.selected.as_deref() == Some(subject) {
            self.selected = None;
        }
    }

    /// The single subject to highlight across all views: hover wins while
    /// present, otherwise the persistent selection.
    pub fn active(&self) -> Option<&str> {
        self.hover.as_deref().or(self.selected.as_deref())
    }

    pub fn hover(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crate::ops::search;

    fn catalog() -> Catalog {
        Catalog::from_entries([("Math", "Ch1"), ("Math", "Ch2"), ("Sci", "Ch1")])
    }

    #[test]
    fn hover_takes_precedence_over_click() {
        let mut sel = Selection::default();
        sel.click("Sci");
        sel.hover_enter("Math");
        assert_eq!(sel.active(), Some("Math"));
        sel.hover_leave("Math");
        assert_eq!(sel.active(), Some("Sci"));
    }

    #[test]
    fn stale_hover_leave_is_ignored() {
        let mut sel = Selection::default();
        sel.hover_enter("Math");
        sel.hover_enter("Sci");
        // leave event for the old hover arrives late
        sel.hover_leave("Math");
        assert_eq!(sel.active(), Some("Sci"));
    }

    #[test]
    fn empty_search_clears_selected() {
        let catalog = catalog();
        let mut sel = Selection::default();
        sel.click("Math");
        sel.search_changed(&search::compute(&catalog, ""));
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn search_selects_top_ranked_match() {
        let catalog = catalog();
        let mut sel = Selection::default();
        // "ch" matches both groups; Math ranks first (2 matches vs 1)
        sel.search_changed(&search::compute(&catalog, "ch"));
        assert_eq!(sel.selected(), Some("Math"));
        // "ch1" ties at 1 match each; catalog order keeps Math first
        sel.search_changed(&search::compute(&catalog, "ch1"));
        assert_eq!(sel.selected(), Some("Math"));
    }

    #[test]
    fn search_with_no_matches_clears_selected() {
        let catalog = catalog();
        let mut sel = Selection::default();
        sel.click("Math");
        sel.search_changed(&search::compute(&catalog, "zzz"));
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn search_leaves_hover_untouched() {
        let catalog = catalog();
        let mut sel = Selection::default();
        sel.hover_enter("Sci");
        sel.search_changed(&search::compute(&catalog, "ch"));
        assert_eq!(sel.hover(), Some("Sci"));
        assert_eq!(sel.active(), Some("Sci"));
    }

    #[test]
    fn group_toggle_updates_selected() {
        let mut sel = Selection::default();
        sel.group_toggled("Math", true);
        assert_eq!(sel.selected(), Some("Math"));
        // closing a different group leaves the selection alone
        sel.group_toggled("Sci", false);
        assert_eq!(sel.selected(), Some("Math"));
        sel.group_toggled("Math", false);
        assert_eq!(sel.selected(), None);
    }
}
