//! Saving and restoring the screen state across a recreation, such as after
//! the terminal is resized.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The saved form of the shopping list screen's state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<String>,
    pub draft: String,
}

/// Somewhere a [`Snapshot`] can be saved to before the screen is torn down,
/// and restored from when it is recreated.
pub trait SnapshotStore {
    /// Saves a snapshot, replacing whatever was saved before.
    fn save(&mut self, snapshot: &Snapshot) -> anyhow::Result<()>;

    /// Restores the last saved snapshot, or `None` if nothing was saved yet.
    fn restore(&self) -> anyhow::Result<Option<Snapshot>>;
}

/// A [`SnapshotStore`] that lives only as long as the process. The snapshot
/// is kept in its serialized form.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    saved: Option<String>,
}

impl MemorySnapshotStore {
    /// Whether anything has been saved yet.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.saved.is_none()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let serialized =
            serde_json::to_string(snapshot).context("Unable to serialize the list snapshot.")?;
        self.saved = Some(serialized);

        Ok(())
    }

    fn restore(&self) -> anyhow::Result<Option<Snapshot>> {
        self.saved
            .as_deref()
            .map(|saved| {
                serde_json::from_str(saved).context("Unable to deserialize the list snapshot.")
            })
            .transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_store_restores_nothing() {
        let store = MemorySnapshotStore::default();

        assert!(store.is_empty());
        assert!(store.restore().unwrap().is_none());
    }

    #[test]
    fn restore_returns_last_save() {
        let mut store = MemorySnapshotStore::default();

        store
            .save(&Snapshot {
                items: vec!["Milk".into()],
                draft: "Te".into(),
            })
            .unwrap();

        let latest = Snapshot {
            items: vec!["Milk".into(), "Tea".into(), "Tea".into()],
            draft: "  \"quoted\" \n".into(),
        };
        store.save(&latest).unwrap();

        assert!(!store.is_empty());
        assert_eq!(store.restore().unwrap(), Some(latest));
    }

    #[test]
    fn restore_is_repeatable() {
        let mut store = MemorySnapshotStore::default();
        let snapshot = Snapshot {
            items: vec!["Bread".into()],
            draft: String::default(),
        };
        store.save(&snapshot).unwrap();

        assert_eq!(store.restore().unwrap().as_ref(), Some(&snapshot));
        assert_eq!(store.restore().unwrap().as_ref(), Some(&snapshot));
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let store = MemorySnapshotStore {
            saved: Some("{\"items\": 3}".into()),
        };

        assert!(store.restore().is_err());
    }
}
