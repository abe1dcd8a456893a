use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{Catalog, Completion};

/// Done/total counts for one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    pub done: usize,
    pub total: usize,
}

impl GroupStats {
    /// Completion percentage, rounded half-up. Empty groups are 0%.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.done as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// The "(done / total)" badge text shown next to a subject heading.
    pub fn counter(&self) -> String {
        format!("({} / {})", self.done, self.total)
    }
}

/// Aggregate progress derived from catalog + completion. Never stored;
/// recomputed from scratch on every change (linear in item count).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// subject → counts, in natural catalog order
    pub per_group: IndexMap<String, GroupStats>,
    pub overall_done: usize,
    pub overall_total: usize,
}

impl Stats {
    pub fn group(&self, subject: &str) -> GroupStats {
        self.per_group.get(subject).copied().unwrap_or_default()
    }

    pub fn overall_percent(&self) -> u32 {
        GroupStats {
            done: self.overall_done,
            total: self.overall_total,
        }
        .percent()
    }
}

/// Compute per-group and overall statistics. Ids in the completion set
/// that are absent from the catalog contribute nothing.
pub fn compute(catalog: &Catalog, completion: &Completion) -> Stats {
    let mut stats = Stats::default();
    for subject in catalog.subjects() {
        let mut group = GroupStats::default();
        for item in catalog.group_items(subject) {
            group.total += 1;
            if completion.is_complete(&item.id) {
                group.done += 1;
            }
        }
        stats.overall_done += group.done;
        stats.overall_total += group.total;
        stats.per_group.insert(subject.to_string(), group);
    }
    stats
}
