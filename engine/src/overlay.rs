//! Local overlay: in-memory additions, edits, and tombstones.

use crate::{UserId, UserRecord};
use std::collections::HashSet;

/// Locally materialized records plus the tombstone set.
///
/// Records are kept newest-first. Every overlay record shadows any remote
/// record sharing its id. Tombstones suppress remote records only: an
/// overlay record stays visible even when its id is tombstoned.
#[derive(Debug, Clone, Default)]
pub struct LocalOverlay {
    records: Vec<UserRecord>,
    tombstones: HashSet<UserId>,
}

impl LocalOverlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay records, newest first.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Get an overlay record by id.
    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|u| u.id == id)
    }

    /// Get a mutable overlay record by id.
    pub fn get_mut(&mut self, id: UserId) -> Option<&mut UserRecord> {
        self.records.iter_mut().find(|u| u.id == id)
    }

    /// Whether an overlay record shadows this id.
    pub fn shadows(&self, id: UserId) -> bool {
        self.records.iter().any(|u| u.id == id)
    }

    /// Whether this id has been deleted.
    pub fn is_tombstoned(&self, id: UserId) -> bool {
        self.tombstones.contains(&id)
    }

    /// Insert a record at the front (most recent first).
    pub fn prepend(&mut self, record: UserRecord) {
        self.records.insert(0, record);
    }

    /// Drop any overlay record with this id. Tombstones are untouched.
    pub fn remove(&mut self, id: UserId) {
        self.records.retain(|u| u.id != id);
    }

    /// Mark an id as deleted.
    pub fn tombstone(&mut self, id: UserId) {
        self.tombstones.insert(id);
    }

    /// Count of overlay records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the overlay holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compute the merged view over an overlay and a remote snapshot.
///
/// Overlay records come first (newest first), followed by the remote records
/// whose id is neither tombstoned nor shadowed by an overlay record, in
/// fetch order. Recomputed on every call; nothing is cached.
pub fn merged_view<'a>(overlay: &'a LocalOverlay, remote: &'a [UserRecord]) -> Vec<&'a UserRecord> {
    let mut view: Vec<&UserRecord> = overlay.records().iter().collect();
    view.extend(
        remote
            .iter()
            .filter(|u| !overlay.is_tombstoned(u.id) && !overlay.shadows(u.id)),
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NewUser;

    fn remote(id: UserId, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn overlay_records_come_first_newest_first() {
        let mut overlay = LocalOverlay::new();
        overlay.prepend(NewUser::new("First", "first@example.com").materialize(10));
        overlay.prepend(NewUser::new("Second", "second@example.com").materialize(11));

        let remote = vec![remote(1, "Remote A"), remote(2, "Remote B")];
        let view = merged_view(&overlay, &remote);

        let names: Vec<&str> = view.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Second", "First", "Remote A", "Remote B"]);
    }

    #[test]
    fn tombstones_suppress_remote_records() {
        let mut overlay = LocalOverlay::new();
        overlay.tombstone(1);

        let remote = vec![remote(1, "Gone"), remote(2, "Kept")];
        let view = merged_view(&overlay, &remote);

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 2);
    }

    #[test]
    fn overlay_record_shadows_remote_with_same_id() {
        let mut overlay = LocalOverlay::new();
        overlay.prepend(remote(1, "Edited"));

        let snapshot = vec![remote(1, "Original"), remote(2, "Other")];
        let view = merged_view(&overlay, &snapshot);

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].name, "Edited");
        assert_eq!(view[1].id, 2);
    }

    #[test]
    fn tombstoned_overlay_record_stays_visible() {
        // Tombstones only apply to the snapshot side of the merge.
        let mut overlay = LocalOverlay::new();
        overlay.tombstone(5);
        overlay.prepend(remote(5, "Resurrected"));

        let view = merged_view(&overlay, &[]);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Resurrected");
    }

    #[test]
    fn remove_keeps_tombstone() {
        let mut overlay = LocalOverlay::new();
        overlay.prepend(remote(3, "Local"));
        overlay.tombstone(3);
        overlay.remove(3);

        assert!(overlay.is_empty());
        assert!(overlay.is_tombstoned(3));
    }
}
