use std::io;

use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::model::Completion;

/// Store key for the completion snapshot
pub const SNAPSHOT_KEY: &str = "completion.v1.json";

const SNAPSHOT_VERSION: u32 = 1;

/// Versioned on-disk payload: `{"version":1,"done":["Math::Ch1",...]}`
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    done: Vec<String>,
}

/// Load the persisted completion set.
///
/// An absent key, unparsable payload, or unknown version all yield an
/// empty set — a missing or corrupt snapshot is never a startup error.
pub fn load(store: &impl KeyValueStore) -> Completion {
    let Some(bytes) = store.get(SNAPSHOT_KEY) else {
        return Completion::default();
    };
    match serde_json::from_slice::<Snapshot>(&bytes) {
        Ok(snap) if snap.version == SNAPSHOT_VERSION => Completion::from_ids(snap.done),
        Ok(snap) => {
            tracing::debug!(version = snap.version, "unknown snapshot version, starting empty");
            Completion::default()
        }
        Err(e) => {
            tracing::debug!(error = %e, "malformed snapshot, starting empty");
            Completion::default()
        }
    }
}

/// Save the completion set as a whole-snapshot write. `Completion::snapshot`
/// sorts the ids, so identical sets always produce identical bytes.
pub fn save(store: &mut impl KeyValueStore, completion: &Completion) -> io::Result<()> {
    let snap = Snapshot {
        version: SNAPSHOT_VERSION,
        done: completion.snapshot(),
    };
    let bytes = serde_json::to_vec_pretty(&snap)?;
    store.set(SNAPSHOT_KEY, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::model::Catalog;

    fn completed(ids: &[&str]) -> Completion {
        Completion::from_ids(ids.iter().map(|s| s.to_string()))
    }

    #[test]
    fn save_load_round_trip() {
        let mut store = MemoryStore::default();
        let completion = completed(&["Math::Ch1", "Sci::Ch1"]);
        save(&mut store, &completion).unwrap();
        assert_eq!(load(&store), completion);
    }

    #[test]
    fn absent_snapshot_loads_empty() {
        let store = MemoryStore::default();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn malformed_snapshot_loads_empty() {
        let mut store = MemoryStore::default();
        store.set(SNAPSHOT_KEY, b"not json {{{").unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn unknown_version_loads_empty() {
        let mut store = MemoryStore::default();
        store
            .set(SNAPSHOT_KEY, br#"{"version":99,"done":["Math::Ch1"]}"#)
            .unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn missing_done_field_defaults_empty() {
        let mut store = MemoryStore::default();
        store.set(SNAPSHOT_KEY, br#"{"version":1}"#).unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn identical_sets_serialize_identically() {
        let mut a = MemoryStore::default();
        let mut b = MemoryStore::default();
        save(&mut a, &completed(&["B::2", "A::1"])).unwrap();
        save(&mut b, &completed(&["A::1", "B::2"])).unwrap();
        assert_eq!(a.get(SNAPSHOT_KEY), b.get(SNAPSHOT_KEY));
    }

    #[test]
    fn stale_ids_round_trip_but_never_count() {
        let catalog = Catalog::from_entries([("Math", "Ch1")]);
        let mut store = MemoryStore::default();
        save(&mut store, &completed(&["Old::Gone", "Math::Ch1"])).unwrap();

        let loaded = load(&store);
        assert!(loaded.is_complete("Old::Gone"));
        let stats = crate::ops::stats::compute(&catalog, &loaded);
        assert_eq!(stats.overall_done, 1);
    }
}
