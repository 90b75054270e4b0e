//! Composition of the two stores and a catalog.

use turbo_commerce::CommerceError;

use crate::cart::{CartAction, CartStore};
use crate::catalog::CatalogApi;
use crate::products::{FetchOutcome, ProductAction, ProductStore, StoreConfig};

/// Owns the product store, the cart store and the catalog they read from.
///
/// Constructed once by the front end and passed to whatever renders it.
pub struct Storefront<C: CatalogApi> {
    catalog: C,
    products: ProductStore,
    cart: CartStore,
}

impl<C: CatalogApi> Storefront<C> {
    /// Create a storefront with default store settings.
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, StoreConfig::default())
    }

    pub fn with_config(catalog: C, config: StoreConfig) -> Self {
        Self {
            catalog,
            products: ProductStore::new(config),
            cart: CartStore::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Apply a product action and fetch if the query key changed.
    pub async fn dispatch_product(&mut self, action: ProductAction) -> Option<FetchOutcome> {
        self.products.dispatch(action);
        self.sync().await
    }

    /// Apply a product action without fetching.
    pub fn update_products(&mut self, action: ProductAction) {
        self.products.dispatch(action);
    }

    pub fn dispatch_cart(&mut self, action: CartAction) -> Result<(), CommerceError> {
        self.cart.dispatch(action)
    }

    /// Fetch the current query key if it changed since the last fetch.
    pub async fn sync(&mut self) -> Option<FetchOutcome> {
        self.products.sync(&self.catalog).await
    }

    /// Re-fetch the current query key.
    pub async fn refresh(&mut self) -> FetchOutcome {
        self.products.refresh(&self.catalog).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use turbo_commerce::catalog::Product;

    fn storefront() -> Storefront<InMemoryCatalog> {
        let products = (1..=30)
            .map(|i| Product::new(i, format!("Item {i}"), 2.0))
            .collect();
        Storefront::new(InMemoryCatalog::new(products))
    }

    #[tokio::test]
    async fn test_fetch_only_on_key_change() {
        let mut shop = storefront();
        assert!(shop.sync().await.is_some());
        assert!(shop.sync().await.is_none());

        shop.dispatch_product(ProductAction::SetPage(1)).await;
        assert_eq!(shop.catalog().requests().len(), 1);

        shop.dispatch_product(ProductAction::NextPage).await;
        assert_eq!(
            shop.catalog().requests(),
            vec![
                "/products?limit=10&skip=0".to_string(),
                "/products?limit=10&skip=10".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_refresh_refetches_same_key() {
        let mut shop = storefront();
        shop.sync().await;
        let outcome = shop.refresh().await;

        assert_eq!(outcome, FetchOutcome::Fulfilled { count: 10 });
        assert_eq!(shop.catalog().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_cart_independent_of_catalog() {
        let mut shop = storefront();
        shop.sync().await;
        let product = shop.products().items()[0].clone();
        shop.dispatch_cart(CartAction::Add(product)).unwrap();

        shop.dispatch_product(ProductAction::NextPage).await;
        assert_eq!(shop.cart().cart().item_count(), 1);
        assert_eq!(shop.products().items()[0].id.get(), 11);
    }
}
