//! # Catalog Provider
//!
//! The asynchronous query surface over the catalog fixture.
//!
//! ## Simulated Latency
//! Every query resolves after the provider's configured delay, modeling the
//! round-trip a real backend would cost. The delay never blocks the caller's
//! thread; concurrent queries may be in flight simultaneously with no
//! ordering between their completions. There is no cancellation: a consumer
//! that loses interest should ignore the late result.
//!
//! ## Search Flow
//! ```text
//! search("phone", Some(1))
//!       │
//!       ▼
//! filter products by category 1
//!       │
//!       ▼
//! non-empty query? retain lines whose name OR description
//! contains "phone" case-insensitively
//!       │
//!       ▼
//! Vec<Product> (stable fixture order)
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use bazaar_core::{Category, Product};

use crate::fixture;

/// The delay each query waits before answering, matching the original
/// storefront's simulated network latency.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(300);

// =============================================================================
// Catalog Port
// =============================================================================

/// The catalog query surface consumed by the presentation layer.
///
/// A real backend implementation must preserve these semantics exactly:
/// operations are pure lookups, complete asynchronously, and never fail.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Produces the full ordered category list.
    async fn list_categories(&self) -> Vec<Category>;

    /// Produces products filtered by category, or all products when no
    /// category is given. Relative order is stable.
    async fn list_products(&self, category_id: Option<u32>) -> Vec<Product>;

    /// Produces the matching product, or `None` if absent.
    async fn get_product(&self, product_id: u32) -> Option<Product>;

    /// Category-filters first, then retains products whose name or
    /// description contains the query as a case-insensitive substring.
    /// An empty query returns the category-filtered set unfiltered by text.
    async fn search(&self, query: &str, category_id: Option<u32>) -> Vec<Product>;
}

// =============================================================================
// Fixture-Backed Implementation
// =============================================================================

/// Catalog provider answering from the in-memory fixture.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    delay: Duration,
}

impl FixtureCatalog {
    /// Creates a provider with the default simulated latency.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    /// Creates a provider with a custom latency.
    ///
    /// Tests pass `Duration::ZERO` so nothing depends on wall-clock timing.
    pub fn with_delay(delay: Duration) -> Self {
        FixtureCatalog {
            categories: fixture::categories(),
            products: fixture::products(),
            delay,
        }
    }

    /// Returns the configured latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn by_category(&self, category_id: Option<u32>) -> Vec<Product> {
        match category_id {
            Some(id) => self
                .products
                .iter()
                .filter(|p| p.category_id == id)
                .cloned()
                .collect(),
            None => self.products.clone(),
        }
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for FixtureCatalog {
    async fn list_categories(&self) -> Vec<Category> {
        self.simulate_latency().await;
        debug!(count = self.categories.len(), "list_categories");
        self.categories.clone()
    }

    async fn list_products(&self, category_id: Option<u32>) -> Vec<Product> {
        self.simulate_latency().await;
        let products = self.by_category(category_id);
        debug!(?category_id, count = products.len(), "list_products");
        products
    }

    async fn get_product(&self, product_id: u32) -> Option<Product> {
        self.simulate_latency().await;
        let product = self.products.iter().find(|p| p.id == product_id).cloned();
        debug!(product_id, found = product.is_some(), "get_product");
        product
    }

    async fn search(&self, query: &str, category_id: Option<u32>) -> Vec<Product> {
        self.simulate_latency().await;

        let mut products = self.by_category(category_id);
        if !query.is_empty() {
            let needle = query.to_lowercase();
            products.retain(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            });
        }

        debug!(query, ?category_id, count = products.len(), "search");
        products
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn catalog() -> FixtureCatalog {
        FixtureCatalog::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_categories_full_ordered() {
        let categories = catalog().list_categories().await;
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].name, "Electronics");
        assert_eq!(categories[4].name, "Sports");
    }

    #[tokio::test]
    async fn test_list_products_without_filter() {
        let products = catalog().list_products(None).await;
        assert_eq!(products.len(), 10);
        // Stable fixture order
        assert_eq!(products[0].id, 1);
        assert_eq!(products[9].id, 10);
    }

    #[tokio::test]
    async fn test_list_products_filters_by_category() {
        let electronics = catalog().list_products(Some(1)).await;
        assert_eq!(electronics.len(), 3);
        assert!(electronics.iter().all(|p| p.category_id == 1));

        let none = catalog().list_products(Some(99)).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_product() {
        let catalog = catalog();

        let product = catalog.get_product(2).await.unwrap();
        assert_eq!(product.name, "Laptop Pro");
        assert_eq!(product.price_cents, 129_999);

        assert!(catalog.get_product(999).await.is_none());
    }

    #[tokio::test]
    async fn test_search_matches_name_and_description_case_insensitive() {
        let catalog = catalog();

        // "phone" appears in "Smartphone X" (name), "Wireless Headphones"
        // (name), and the smartphone's description.
        let hits = catalog.search("phone", None).await;
        let ids: Vec<u32> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let upper = catalog.search("PHONE", None).await;
        assert_eq!(upper.len(), hits.len());

        // Description-only match
        let comfy = catalog.search("patio", None).await;
        assert_eq!(comfy.len(), 1);
        assert_eq!(comfy[0].id, 9);
    }

    #[tokio::test]
    async fn test_search_applies_category_filter_first() {
        let catalog = catalog();

        let all_comfortable = catalog.search("comfortable", None).await;
        assert!(all_comfortable.len() > 2);

        let clothing_only = catalog.search("comfortable", Some(2)).await;
        assert!(clothing_only.iter().all(|p| p.category_id == 2));
        assert_eq!(clothing_only.len(), 3);
    }

    #[tokio::test]
    async fn test_search_empty_query_returns_category_set() {
        let catalog = catalog();

        let books = catalog.search("", Some(3)).await;
        assert_eq!(books.len(), 2);

        let everything = catalog.search("", None).await;
        assert_eq!(everything.len(), 10);
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let hits = catalog().search("zzz-no-such-product", None).await;
        assert!(hits.is_empty());
    }
}
