use std::collections::HashSet;

use serde::Serialize;

use crate::io::snapshot;
use crate::io::store::KeyValueStore;
use crate::model::{Catalog, Completion, Selection};
use crate::ops::search::{self, SearchResult};
use crate::ops::stats::{self, Stats};

/// Every input the engine accepts. One event in, exactly one `ViewModel`
/// out — there are no intermediate emissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Flip completion of one item
    Toggle(String),
    /// The (already debounced) search query changed
    QueryChanged(String),
    /// Pointer entered a subject's header or compact button
    HoverEnter(String),
    /// Pointer left a subject's header or compact button
    HoverLeave(String),
    /// A subject was clicked
    Click(String),
    /// A subject group was expanded or collapsed
    GroupToggled { subject: String, open: bool },
}

/// The consolidated snapshot handed to the rendering boundary on every
/// update. Consumers treat it as a full replacement; no diffing contract
/// is promised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub stats: Stats,
    pub search: SearchResult,
    /// The single highlighted subject, hover taking precedence over click
    pub active_subject: Option<String>,
    /// Presentation order for groups (ranked while a query is active)
    pub group_order: Vec<String>,
    /// Groups currently expanded, in presentation order
    pub open_groups: Vec<String>,
}

type UpdateFn = Box<dyn FnMut(&ViewModel)>;

/// Owns all engine state and coordinates the derived recomputes.
///
/// One input event is fully processed — mutate, persist, recompute, emit —
/// before the next is accepted; stats and search in a given `ViewModel`
/// always reflect the same completion snapshot.
pub struct Engine<S: KeyValueStore> {
    catalog: Catalog,
    completion: Completion,
    store: S,
    selection: Selection,
    search: SearchResult,
    open: HashSet<String>,
    subscribers: Vec<UpdateFn>,
    last_save_error: Option<String>,
}

impl<S: KeyValueStore> Engine<S> {
    /// Hydrate the completion set from the store and compute the initial
    /// derived state. All groups start open, matching the empty-query
    /// search state.
    pub fn new(catalog: Catalog, store: S) -> Self {
        let completion = snapshot::load(&store);
        let search = search::compute(&catalog, "");
        let open = catalog.subjects().map(str::to_string).collect();
        Engine {
            catalog,
            completion,
            store,
            selection: Selection::default(),
            search,
            open,
            subscribers: Vec::new(),
            last_save_error: None,
        }
    }

    /// Register a rendering-boundary callback, invoked once per input
    /// event with the freshly assembled `ViewModel`.
    pub fn on_update(&mut self, callback: impl FnMut(&ViewModel) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Process one input event and emit exactly one `ViewModel` (also
    /// returned, for callers that poll instead of subscribing).
    pub fn handle(&mut self, event: InputEvent) -> ViewModel {
        match event {
            InputEvent::Toggle(id) => {
                if self.completion.toggle(&self.catalog, &id) {
                    self.persist();
                }
            }
            InputEvent::QueryChanged(text) => {
                self.search = search::compute(&self.catalog, &text);
                self.selection.search_changed(&self.search);
                // matching groups open, the rest close; on a cleared
                // query everything matches, so everything reopens
                self.open = self.search.matching_groups().map(str::to_string).collect();
            }
            InputEvent::HoverEnter(subject) => {
                if self.known_subject(&subject) {
                    self.selection.hover_enter(&subject);
                }
            }
            InputEvent::HoverLeave(subject) => {
                self.selection.hover_leave(&subject);
            }
            InputEvent::Click(subject) => {
                if self.known_subject(&subject) {
                    self.selection.click(&subject);
                    // a click expands only the clicked group
                    self.open.clear();
                    self.open.insert(subject);
                }
            }
            InputEvent::GroupToggled { subject, open } => {
                if self.known_subject(&subject) {
                    self.selection.group_toggled(&subject, open);
                    if open {
                        self.open.insert(subject);
                    } else {
                        self.open.remove(&subject);
                    }
                }
            }
        }
        self.emit()
    }

    /// Replace the whole completion set (ids unknown to the catalog are
    /// dropped), persist, and emit.
    pub fn set_all<I>(&mut self, ids: I) -> ViewModel
    where
        I: IntoIterator<Item = String>,
    {
        self.completion.set_all(&self.catalog, ids);
        self.persist();
        self.emit()
    }

    /// Assemble the current `ViewModel` without processing an event.
    pub fn view_model(&self) -> ViewModel {
        ViewModel {
            stats: stats::compute(&self.catalog, &self.completion),
            search: self.search.clone(),
            active_subject: self.selection.active().map(str::to_string),
            group_order: self.search.group_order.clone(),
            open_groups: self
                .search
                .group_order
                .iter()
                .filter(|g| self.open.contains(g.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The error message from the most recent failed snapshot save, if the
    /// save after it has not succeeded yet. Durability is best-effort: the
    /// in-memory state is authoritative and is never rolled back.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    fn persist(&mut self) {
        match snapshot::save(&mut self.store, &self.completion) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "completion snapshot save failed");
                self.last_save_error = Some(e.to_string());
            }
        }
    }

    fn known_subject(&self, subject: &str) -> bool {
        let known = self.catalog.contains_subject(subject);
        if !known {
            tracing::debug!(subject, "event for unknown subject ignored");
        }
        known
    }

    fn emit(&mut self) -> ViewModel {
        let vm = self.view_model();
        for callback in &mut self.subscribers {
            callback(&vm);
        }
        vm
    }
}
