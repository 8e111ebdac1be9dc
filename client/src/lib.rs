//! # Rolodex Client
//!
//! Async runtime around [`rolodex_engine`]: issues the one-time fetch of the
//! remote user listing and exposes the process-wide [`Directory`] context
//! object that the presentation layer consumes.
//!
//! The engine stays pure; everything that touches the network or the
//! environment lives here.

pub mod config;
pub mod directory;
pub mod error;
pub mod fetch;

pub use config::{Config, ConfigError};
pub use directory::Directory;
pub use error::{ClientError, Result};

// Engine surface re-exported for consumers
pub use rolodex_engine as engine;
pub use rolodex_engine::{DirectoryQuery, NewUser, SnapshotState, SortKey, UserPatch, UserRecord};
