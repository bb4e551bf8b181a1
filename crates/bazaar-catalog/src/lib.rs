//! # bazaar-catalog: Catalog Data Provider
//!
//! Owns the immutable catalog fixture and exposes the asynchronous query
//! surface the presentation layer consumes.
//!
//! ## Modules
//!
//! - [`fixture`] - the static category/product dataset
//! - [`provider`] - the [`Catalog`] port trait and its fixture-backed
//!   implementation with simulated network latency
//!
//! ## Query Contract
//!
//! Every operation completes after the provider's configured delay and never
//! fails: a missing product is `None`, an unmatched filter is an empty list.
//! A real backend replacing [`FixtureCatalog`] must preserve these exact
//! filtering semantics behind the same trait.
//!
//! ```rust
//! use bazaar_catalog::{Catalog, FixtureCatalog};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let catalog = FixtureCatalog::with_delay(Duration::ZERO);
//! let electronics = catalog.list_products(Some(1)).await;
//! assert!(electronics.iter().all(|p| p.category_id == 1));
//! # }
//! ```

pub mod fixture;
pub mod provider;

pub use provider::{Catalog, FixtureCatalog, DEFAULT_FETCH_DELAY};
