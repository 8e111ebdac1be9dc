//! Remote snapshot lifecycle.
//!
//! The snapshot is fetched once per session and read-only afterwards. The
//! tri-state makes the failure case explicit: a failed fetch contributes the
//! same zero records as an empty directory, and only the state tells the
//! two apart.

use crate::UserRecord;

/// Observable state of the remote snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotState {
    /// Fetch still in flight.
    Pending,
    /// Fetch completed; records are frozen.
    Ready,
    /// Fetch failed; the snapshot stays empty for the session.
    Failed,
}

/// The one-time fetch result from the remote source.
///
/// Settles exactly once: `Pending` -> `Ready` or `Pending` -> `Failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoteSnapshot {
    #[default]
    Pending,
    Ready(Vec<UserRecord>),
    Failed,
}

impl RemoteSnapshot {
    pub fn state(&self) -> SnapshotState {
        match self {
            RemoteSnapshot::Pending => SnapshotState::Pending,
            RemoteSnapshot::Ready(_) => SnapshotState::Ready,
            RemoteSnapshot::Failed => SnapshotState::Failed,
        }
    }

    /// Records contributed to the merged view. Empty unless ready.
    pub fn records(&self) -> &[UserRecord] {
        match self {
            RemoteSnapshot::Ready(records) => records,
            _ => &[],
        }
    }

    /// Whether the snapshot has left the pending state.
    pub fn is_settled(&self) -> bool {
        !matches!(self, RemoteSnapshot::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending_and_empty() {
        let snapshot = RemoteSnapshot::default();
        assert_eq!(snapshot.state(), SnapshotState::Pending);
        assert!(snapshot.records().is_empty());
        assert!(!snapshot.is_settled());
    }

    #[test]
    fn ready_exposes_records() {
        let snapshot = RemoteSnapshot::Ready(vec![UserRecord {
            id: 1,
            ..Default::default()
        }]);

        assert_eq!(snapshot.state(), SnapshotState::Ready);
        assert_eq!(snapshot.records().len(), 1);
        assert!(snapshot.is_settled());
    }

    #[test]
    fn failed_is_settled_but_empty() {
        let snapshot = RemoteSnapshot::Failed;
        assert_eq!(snapshot.state(), SnapshotState::Failed);
        assert!(snapshot.records().is_empty());
        assert!(snapshot.is_settled());
    }
}
