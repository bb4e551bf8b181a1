//! # Cart Module
//!
//! The shopping cart collection and its derived aggregates.
//!
//! ## Aggregates
//! `total_items` (sum of quantities) and `total_price` (sum of line totals)
//! are maintained incrementally inside every mutation, in the same state
//! transition as the item list itself. They are never recomputed lazily.
//!
//! ## Invariants
//! - Item ids are unique within the cart (repeat adds bump the quantity)
//! - No mutation fails: unknown ids are silent no-ops
//!
//! ## Repeat-add pricing
//! A repeat `add` leaves the stored line's frozen unit price untouched but
//! grows `total_price` by the *incoming* item's unit price. When a caller
//! passes a price that differs from the frozen one, the aggregate diverges
//! from the fold over the lines. This mirrors the long-standing storefront
//! behavior and is pinned by tests; see DESIGN.md.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CartItem;

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: lines plus incrementally-maintained aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
    total_items: i64,
    total_price: Money,
}

impl Cart {
    /// Creates a new empty cart with zero aggregates.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Reassembles a cart from persisted parts.
    ///
    /// The aggregates are restored as persisted, not recomputed, so a
    /// snapshot round-trips without loss.
    pub fn from_parts(items: Vec<CartItem>, total_items: i64, total_price: Money) -> Self {
        Cart {
            items,
            total_items,
            total_price,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds an item to the cart.
    ///
    /// ## Behavior
    /// - Line with the same id exists: its quantity grows by 1; the incoming
    ///   item's name/price/image are discarded
    /// - No such line: the item is inserted with quantity 1, whatever
    ///   quantity the caller set
    ///
    /// Either way `total_items` grows by 1 and `total_price` by the incoming
    /// item's unit price.
    pub fn add(&mut self, item: CartItem) {
        let unit_price = item.price();

        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += 1;
        } else {
            self.items.push(CartItem { quantity: 1, ..item });
        }

        self.total_items += 1;
        self.total_price += unit_price;
        self.debug_check();
    }

    /// Removes a line entirely, regardless of its quantity.
    ///
    /// `total_items` shrinks by the line's full quantity and `total_price`
    /// by its frozen unit price × quantity. Unknown ids are a no-op.
    pub fn remove(&mut self, item_id: u32) {
        if let Some(pos) = self.items.iter().position(|line| line.id == item_id) {
            let removed = self.items.remove(pos);
            self.total_items -= removed.quantity;
            self.total_price -= removed.line_total();
        }
        self.debug_check();
    }

    /// Replaces a line's quantity.
    ///
    /// ## Behavior
    /// - Quantity <= 0: the line is removed (same arithmetic as [`remove`])
    /// - Otherwise: both aggregates are adjusted by the signed delta at the
    ///   line's frozen unit price
    /// - Unknown ids are a no-op
    ///
    /// [`remove`]: Cart::remove
    pub fn set_quantity(&mut self, item_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(item_id);
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.id == item_id) {
            let delta = quantity - line.quantity;
            let unit_price = line.price();
            line.quantity = quantity;
            self.total_items += delta;
            self.total_price += unit_price.multiply_quantity(delta);
        }
        self.debug_check();
    }

    /// Clears all lines and zeroes both aggregates.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_items = 0;
        self.total_price = Money::zero();
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// All cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up a line by product id.
    pub fn get(&self, item_id: u32) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == item_id)
    }

    /// Sum of all line quantities.
    #[inline]
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Sum of all line totals, tracked incrementally.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // total_price can legitimately diverge from the line fold when repeat
    // adds pass a different unit price, so only the quantity sum is checked.
    fn debug_check(&self) {
        debug_assert_eq!(
            self.total_items,
            self.items.iter().map(|line| line.quantity).sum::<i64>()
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
