//! The application-wide directory context.

use crate::config::Config;
use crate::fetch;
use rolodex_engine::{
    DirectoryQuery, DirectoryStore, NewUser, SnapshotState, UserId, UserPatch, UserRecord,
};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// The one directory instance shared by the whole application.
///
/// Created at startup, handed to consumers, dropped at shutdown. Wraps the
/// engine store behind a single lock and drives the one-time snapshot fetch;
/// all mutations are serialized through that lock.
#[derive(Clone)]
pub struct Directory {
    store: Arc<RwLock<DirectoryStore>>,
    state_rx: watch::Receiver<SnapshotState>,
}

impl Directory {
    /// Create the directory and kick off the snapshot fetch.
    ///
    /// The fetch runs on a single background task. On success the result is
    /// installed as the read-only snapshot; on failure the snapshot settles
    /// as failed and the directory stays empty for the session.
    pub fn start(config: &Config) -> Self {
        let store = Arc::new(RwLock::new(DirectoryStore::new()));
        let (state_tx, state_rx) = watch::channel(SnapshotState::Pending);

        let task_store = Arc::clone(&store);
        let endpoint = config.endpoint().to_string();
        tokio::spawn(async move {
            let client = reqwest::Client::new();
            let state = match fetch::fetch_users(&client, &endpoint).await {
                Ok(users) => {
                    tracing::info!(count = users.len(), "remote snapshot fetched");
                    let mut store = task_store.write().await;
                    if let Err(err) = store.install_snapshot(users) {
                        tracing::error!(error = %err, "could not install snapshot");
                    }
                    SnapshotState::Ready
                }
                Err(err) => {
                    tracing::warn!(error = %err, "remote fetch failed; directory starts empty");
                    let mut store = task_store.write().await;
                    if let Err(err) = store.mark_snapshot_failed() {
                        tracing::error!(error = %err, "could not settle snapshot");
                    }
                    SnapshotState::Failed
                }
            };
            let _ = state_tx.send(state);
        });

        Self { store, state_rx }
    }

    /// Wait until the snapshot leaves the pending state.
    pub async fn settled(&self) -> SnapshotState {
        let mut rx = self.state_rx.clone();
        loop {
            let state = *rx.borrow_and_update();
            if state != SnapshotState::Pending {
                return state;
            }
            if rx.changed().await.is_err() {
                return *rx.borrow();
            }
        }
    }

    /// Current snapshot state.
    pub async fn snapshot_state(&self) -> SnapshotState {
        self.store.read().await.snapshot_state()
    }

    /// The merged view, cloned out of the store.
    pub async fn users(&self) -> Vec<UserRecord> {
        self.store
            .read()
            .await
            .list()
            .into_iter()
            .cloned()
            .collect()
    }

    /// The merged view run through a filter/sort query.
    pub async fn search(&self, query: &DirectoryQuery) -> Vec<UserRecord> {
        let store = self.store.read().await;
        query.apply(store.list()).into_iter().cloned().collect()
    }

    /// Create a record. See [`DirectoryStore::add`].
    pub async fn add(&self, new_user: NewUser) -> UserRecord {
        self.store.write().await.add(new_user)
    }

    /// Patch a record. See [`DirectoryStore::update`].
    pub async fn update(&self, id: UserId, patch: UserPatch) {
        self.store.write().await.update(id, patch);
    }

    /// Delete a record. See [`DirectoryStore::delete`].
    pub async fn delete(&self, id: UserId) {
        self.store.write().await.delete(id);
    }

    /// Look up a record by id.
    pub async fn get_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.store.read().await.get_by_id(id).cloned()
    }
}
