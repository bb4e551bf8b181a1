//! # Domain Types
//!
//! Core domain types used throughout Bazaar.
//!
//! ## Type Overview
//! ```text
//! Product   - catalog record, immutable fixture data
//! Category  - catalog grouping, immutable fixture data
//! CartItem  - cart line with a price snapshot frozen at add-time
//! User      - ephemeral session identity (no persistent user directory)
//! ```
//!
//! All wire-facing types serialize with camelCase field names and export
//! TypeScript bindings for the browser frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Fixture data: never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: u32,

    /// Display name shown in listings and on the product page.
    pub name: String,

    /// Longer description, searched alongside the name.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image URI.
    pub image: String,

    /// Category this product belongs to.
    pub category_id: u32,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category.
///
/// Fixture data: never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    /// Unique identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Image URI.
    pub image: String,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// Uses the snapshot pattern: name, price, and image are frozen copies of the
/// product data at the moment the line was created. The cart displays
/// consistent data even if the catalog record changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product id this line refers to. Unique within a cart.
    pub id: u32,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Quantity in cart.
    pub quantity: i64,

    /// Image URI at time of adding (frozen).
    pub image: String,

    /// When this line was created.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart line from a product, freezing its display data and
    /// unit price at this moment.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            price_cents: product.price_cents,
            quantity: 1,
            image: product.image.clone(),
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in user.
///
/// Ephemeral: reconstructed fresh on every login/register call. There is no
/// persistent user directory, so the username is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    /// Display name supplied at login. Not validated.
    pub username: String,

    /// Whether the session has admin privileges.
    pub is_admin: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: format!("Description for product {}", id),
            price_cents,
            image: format!("https://img.example/{}.jpg", id),
            category_id: 1,
        }
    }

    #[test]
    fn test_cart_item_freezes_product_data() {
        let product = test_product(7, 3499);
        let item = CartItem::from_product(&product);

        assert_eq!(item.id, 7);
        assert_eq!(item.name, product.name);
        assert_eq!(item.price_cents, 3499);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.image, product.image);
    }

    #[test]
    fn test_line_total() {
        let product = test_product(1, 999);
        let mut item = CartItem::from_product(&product);
        item.quantity = 3;
        assert_eq!(item.line_total(), Money::from_cents(2997));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let product = test_product(1, 999);
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"priceCents\""));
        assert!(json.contains("\"categoryId\""));

        let user = User {
            username: "alice".to_string(),
            is_admin: true,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"isAdmin\":true"));
    }
}
