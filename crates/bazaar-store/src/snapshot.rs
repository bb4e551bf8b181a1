//! # Snapshot
//!
//! The serialized form of the store's full observable state, written to the
//! backend under a fixed key after every mutation and read back once at
//! construction.
//!
//! ## Compatibility
//! Every field carries `#[serde(default)]`: a snapshot written by an older
//! build (or with fields missing for any reason) loads with the initial
//! state's values in the gaps. Unknown fields are ignored by serde's default
//! behavior. Malformed payloads are handled by the store, not here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use bazaar_core::{CartItem, Money, User};

use crate::error::SnapshotResult;

/// The fixed key the snapshot lives under in the backend.
///
/// Matches the slot name the original storefront persisted to, so an
/// existing browser-side snapshot remains readable.
pub const SNAPSHOT_KEY: &str = "e-commerce-store";

/// Full-state snapshot: cart lines, aggregates, and auth fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snapshot {
    /// Cart lines in insertion order.
    #[serde(default)]
    pub cart: Vec<CartItem>,

    /// Sum of all line quantities, as tracked incrementally.
    #[serde(default)]
    pub total_items: i64,

    /// Sum of all line totals, as tracked incrementally.
    #[serde(default)]
    pub total_price: Money,

    /// The signed-in user, if any.
    #[serde(default)]
    pub current_user: Option<User>,

    /// Whether a user is signed in.
    #[serde(default)]
    pub is_authenticated: bool,
}

impl Snapshot {
    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
