//! # bazaar-store: Application State Store
//!
//! The single process-wide state container for the storefront: cart contents,
//! derived aggregates, and authentication status.
//!
//! ## State Flow
//! ```text
//! page component ──► Store mutation (add_to_cart, login, ...)
//!                         │  synchronous, atomic transition
//!                         ▼
//!                  in-memory state updated
//!                         │
//!                         ├──► snapshot saved to the backend
//!                         │    (fixed key, silent fallback on load)
//!                         ▼
//!                  subscribers notified (post-commit)
//!                         │
//!                         ▼
//!                  presentation re-renders from updated state
//! ```
//!
//! ## Modules
//!
//! - [`store`] - the [`Store`] container and its mutation/read surface
//! - [`persist`] - the injectable [`SnapshotBackend`] seam + implementations
//! - [`snapshot`] - the serialized full-state record
//! - [`auth`] - the pluggable [`Authenticator`] policy seam (mock included)
//! - [`subscribe`] - explicit observer interface ([`StoreEvent`])
//! - [`error`] - the persistence error surface

pub mod auth;
pub mod error;
pub mod persist;
pub mod snapshot;
pub mod store;
pub mod subscribe;

pub use auth::{Authenticator, MockAuthenticator, ADMIN_PASSWORD};
pub use error::SnapshotError;
pub use persist::{FileBackend, MemoryBackend, SnapshotBackend};
pub use snapshot::{Snapshot, SNAPSHOT_KEY};
pub use store::Store;
pub use subscribe::{StoreEvent, SubscriptionId};
