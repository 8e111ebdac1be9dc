//! Directory store: the in-memory state container.
//!
//! The store pairs the read-only remote snapshot with the local overlay and
//! serves every read and write against the merged view. All operations are
//! total: unknown ids are silent no-ops, never errors.

use crate::{
    merged_view, Error, LocalOverlay, NewUser, RemoteSnapshot, SnapshotState, UserId, UserPatch,
    UserRecord,
};
use crate::error::Result;

/// The authoritative in-memory view of the directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    snapshot: RemoteSnapshot,
    overlay: LocalOverlay,
}

impl DirectoryStore {
    /// Create a store with a pending snapshot and an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot state.
    pub fn snapshot_state(&self) -> SnapshotState {
        self.snapshot.state()
    }

    /// Install the one-time fetch result. The snapshot is read-only from
    /// here on; settling a second time is an error.
    pub fn install_snapshot(&mut self, records: Vec<UserRecord>) -> Result<()> {
        if self.snapshot.is_settled() {
            return Err(Error::SnapshotAlreadySettled);
        }
        self.snapshot = RemoteSnapshot::Ready(records);
        Ok(())
    }

    /// Record that the fetch failed. The snapshot stays empty for the
    /// session; readers see the same view as for zero users.
    pub fn mark_snapshot_failed(&mut self) -> Result<()> {
        if self.snapshot.is_settled() {
            return Err(Error::SnapshotAlreadySettled);
        }
        self.snapshot = RemoteSnapshot::Failed;
        Ok(())
    }

    /// The merged view, recomputed on every call.
    ///
    /// Overlay records first, most recently added on top, then the remaining
    /// remote records in fetch order. Every id appears at most once.
    pub fn list(&self) -> Vec<&UserRecord> {
        merged_view(&self.overlay, self.snapshot.records())
    }

    /// Materialize a record from the input and prepend it to the overlay.
    ///
    /// The id is one past the highest id in the merged view (floor 0).
    /// Neither name nor email is checked for uniqueness.
    pub fn add(&mut self, new_user: NewUser) -> UserRecord {
        let record = new_user.materialize(self.next_id());
        self.overlay.prepend(record.clone());
        record
    }

    /// Shallow-merge `patch` into the record with this id.
    ///
    /// An overlay record is patched in place, keeping its position. A
    /// snapshot record is materialized into the overlay first and shadows
    /// the remote copy from then on. Unknown ids are a no-op.
    pub fn update(&mut self, id: UserId, patch: UserPatch) {
        if let Some(record) = self.overlay.get_mut(id) {
            patch.apply_to(record);
            return;
        }
        if let Some(remote) = self.snapshot.records().iter().find(|u| u.id == id) {
            let mut record = remote.clone();
            patch.apply_to(&mut record);
            self.overlay.prepend(record);
        }
    }

    /// Remove the record with this id from the merged view.
    ///
    /// Drops any overlay record and tombstones the id unconditionally, so a
    /// remote record with the same id stays suppressed. Idempotent.
    pub fn delete(&mut self, id: UserId) {
        self.overlay.remove(id);
        self.overlay.tombstone(id);
    }

    /// Linear lookup on the merged view.
    pub fn get_by_id(&self, id: UserId) -> Option<&UserRecord> {
        self.list().into_iter().find(|u| u.id == id)
    }

    /// The local overlay (additions, edits, tombstones).
    pub fn overlay(&self) -> &LocalOverlay {
        &self.overlay
    }

    fn next_id(&self) -> UserId {
        self.list().iter().map(|u| u.id).max().unwrap_or(0) + 1
    }
}
