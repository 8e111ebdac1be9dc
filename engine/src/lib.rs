//! # Rolodex Engine
//!
//! The in-memory overlay store behind the Rolodex user directory.
//!
//! This crate holds the core logic for browsing and editing a directory whose
//! records come from a remote listing endpoint. The remote fetch result is
//! installed once as a read-only snapshot; every later change lives in a local
//! overlay that is merged over the snapshot on each read.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of HTTP, files, or platform
//! - **Deterministic**: the merged view is a pure function of snapshot and overlay
//! - **Testable**: plain state in, plain state out, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`UserRecord`] carries contact fields plus [`Address`] and [`Company`]
//! sub-structs, in the same JSON shape the remote endpoint serves.
//!
//! ### Remote Snapshot
//!
//! The [`RemoteSnapshot`] settles exactly once per session: `Pending` until
//! the fetch finishes, then `Ready` with the fetched records or `Failed` with
//! none. A failed fetch looks like an empty directory to readers; only
//! [`SnapshotState`] tells the two apart.
//!
//! ### Local Overlay
//!
//! The [`LocalOverlay`] keeps locally created and edited records
//! (newest-first) and a tombstone set of deleted ids. Overlay records always
//! shadow remote records with the same id; tombstones suppress remote records
//! only.
//!
//! ### Merged View
//!
//! [`merged_view`] combines overlay and snapshot with no hidden caching.
//! Every id appears at most once.
//!
//! ## Quick Start
//!
//! ```rust
//! use rolodex_engine::{DirectoryStore, NewUser, UserPatch};
//!
//! // 1. Create a store and settle the remote snapshot
//! let mut store = DirectoryStore::new();
//! store.install_snapshot(Vec::new()).unwrap();
//!
//! // 2. Mutate through the overlay
//! let jane = store.add(NewUser::new("Jane Doe", "jane@example.com"));
//! assert_eq!(jane.id, 1);
//! assert_eq!(jane.username, "janedoe");
//!
//! store.update(jane.id, UserPatch::default().name("Jane Roe"));
//!
//! // 3. Read the merged view
//! let users = store.list();
//! assert_eq!(users.len(), 1);
//! assert_eq!(users[0].name, "Jane Roe");
//! ```

pub mod change;
pub mod error;
pub mod overlay;
pub mod query;
pub mod record;
pub mod snapshot;
pub mod store;
pub mod validate;

// Re-export main types at crate root
pub use change::{NewUser, UserPatch};
pub use error::Error;
pub use overlay::{merged_view, LocalOverlay};
pub use query::{DirectoryQuery, SortKey};
pub use record::{Address, Company, Geo, UserRecord};
pub use snapshot::{RemoteSnapshot, SnapshotState};
pub use store::DirectoryStore;
pub use validate::{validate_email, validate_new_user};

/// Record identifier, assigned by the remote source or generated locally.
pub type UserId = u64;
