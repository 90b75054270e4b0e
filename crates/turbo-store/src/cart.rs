//! Cart store.

use turbo_commerce::cart::{Cart, CartItem};
use turbo_commerce::catalog::Product;
use turbo_commerce::{CommerceError, ProductId};

/// State transitions accepted by the cart store.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product, merging with an existing line.
    Add(Product),
    /// Remove a line; no-op if absent.
    Remove(ProductId),
    /// Overwrite a line's quantity; <= 0 removes it.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

/// Locally owned cart, independent of the catalog's lifecycle.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a state transition. The cart is unchanged on error.
    pub fn dispatch(&mut self, action: CartAction) -> Result<(), CommerceError> {
        match action {
            CartAction::Add(product) => {
                let quantity = self.cart.add(&product)?;
                tracing::debug!(id = %product.id, quantity, "added to cart");
            }
            CartAction::Remove(id) => {
                self.remove(id);
            }
            CartAction::SetQuantity { id, quantity } => {
                if self.cart.set_quantity(id, quantity)? {
                    tracing::debug!(%id, quantity, "cart quantity updated");
                }
            }
            CartAction::Clear => self.cart.clear(),
        }
        Ok(())
    }

    pub fn add(&mut self, product: Product) -> Result<(), CommerceError> {
        self.dispatch(CartAction::Add(product))
    }

    /// Remove a line. Returns whether it was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            tracing::debug!(%id, "removed from cart");
        }
        removed
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), CommerceError> {
        self.dispatch(CartAction::SetQuantity { id, quantity })
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantities(store: &CartStore) -> Vec<(u64, i64)> {
        store
            .items()
            .iter()
            .map(|i| (i.id.get(), i.quantity))
            .collect()
    }

    #[test]
    fn test_cart_lifecycle() {
        let mut store = CartStore::new();
        let product = Product::new(5, "Lamp", 20.0);

        store.add(product.clone()).unwrap();
        assert_eq!(quantities(&store), vec![(5, 1)]);

        store.add(product).unwrap();
        assert_eq!(quantities(&store), vec![(5, 2)]);

        store.set_quantity(ProductId::new(5), 7).unwrap();
        assert_eq!(quantities(&store), vec![(5, 7)]);

        assert!(store.remove(ProductId::new(5)));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_repeated_adds_single_line() {
        let mut store = CartStore::new();
        let product = Product::new(9, "Mug", 4.0);
        for _ in 0..13 {
            store.add(product.clone()).unwrap();
        }
        assert_eq!(quantities(&store), vec![(9, 13)]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = CartStore::new();
        store.add(Product::new(1, "A", 1.0)).unwrap();
        assert!(!store.remove(ProductId::new(2)));
        assert!(!store.remove(ProductId::new(2)));
        assert!(store.remove(ProductId::new(1)));
        assert!(!store.remove(ProductId::new(1)));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_dispatch_remove_absent_is_ok() {
        let mut store = CartStore::new();
        store.add(Product::new(1, "A", 1.0)).unwrap();
        store.dispatch(CartAction::Remove(ProductId::new(2))).unwrap();
        assert_eq!(quantities(&store), vec![(1, 1)]);
    }

    #[test]
    fn test_over_limit_leaves_cart_unchanged() {
        let mut store = CartStore::new();
        store.add(Product::new(1, "A", 1.0)).unwrap();

        let err = store.set_quantity(ProductId::new(1), 10_000).unwrap_err();
        assert!(matches!(err, CommerceError::QuantityExceedsLimit(10_000, _)));
        assert_eq!(quantities(&store), vec![(1, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut store = CartStore::new();
        store.add(Product::new(1, "A", 1.0)).unwrap();
        store.add(Product::new(2, "B", 1.0)).unwrap();
        store.dispatch(CartAction::Clear).unwrap();
        assert!(store.cart().is_empty());
    }
}
