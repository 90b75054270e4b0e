//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Holds at most one line item per product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same id has its quantity incremented;
    /// otherwise a new line is created from a snapshot of the product.
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> Result<i64, CommerceError> {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        self.items.push(CartItem::from_product(product));
        Ok(1)
    }

    /// Overwrite the quantity of a line item.
    ///
    /// A quantity <= 0 removes the line. Returns whether a line was touched;
    /// an unknown id is a no-op.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line item. Returns false if it was not in the cart.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line item by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price * quantity over all lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Mirrors the product id.
    pub id: ProductId,
    /// Product title at the time it was added.
    pub title: String,
    /// Unit price at the time it was added.
    pub price: f64,
    /// Thumbnail URL at the time it was added.
    pub thumbnail: String,
    pub quantity: i64,
}

impl CartItem {
    /// Snapshot a product into a new line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
