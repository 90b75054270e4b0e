//! Product list page.

use turbo_commerce::catalog::Product;
use turbo_commerce::{CommerceError, ProductId};
use turbo_data::FetchError;

use crate::cart::CartAction;
use crate::catalog::CatalogApi;
use crate::products::{FetchOutcome, ProductAction};
use crate::storefront::Storefront;

/// What the product grid should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListDisplay<'a> {
    /// A fetch is in flight.
    Loading,
    /// Products to render. `error` is set when the latest fetch failed and
    /// these are the previous results.
    Products {
        items: &'a [Product],
        error: Option<&'a FetchError>,
    },
    /// The last fetch failed and there is nothing to show.
    Failed(&'a FetchError),
    /// The catalog returned no products.
    Empty,
}

/// The product list page: a search form, the product grid, pagination
/// controls and an add-to-cart action per product.
///
/// Its only state is the uncommitted search draft.
#[derive(Debug, Clone, Default)]
pub struct ProductListView {
    draft: String,
}

impl ProductListView {
    /// Open the view with the draft seeded from the active search term.
    pub fn new<C: CatalogApi>(shop: &Storefront<C>) -> Self {
        Self {
            draft: shop.products().search_term().to_string(),
        }
    }

    /// Initial fetch for the current key.
    pub async fn mount<C: CatalogApi>(&self, shop: &mut Storefront<C>) -> Option<FetchOutcome> {
        shop.sync().await
    }

    /// Leaving the view clears the search term. The page is kept.
    pub fn unmount<C: CatalogApi>(self, shop: &mut Storefront<C>) {
        shop.update_products(ProductAction::ResetSearch);
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Edit the search box without committing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft as the search term and go back to page 1.
    pub async fn submit_search<C: CatalogApi>(
        &mut self,
        shop: &mut Storefront<C>,
    ) -> Option<FetchOutcome> {
        shop.dispatch_product(ProductAction::SetSearchTerm(self.draft.clone()))
            .await
    }

    pub async fn next_page<C: CatalogApi>(
        &self,
        shop: &mut Storefront<C>,
    ) -> Option<FetchOutcome> {
        shop.dispatch_product(ProductAction::NextPage).await
    }

    /// Go back one page; does nothing on page 1.
    pub async fn previous_page<C: CatalogApi>(
        &self,
        shop: &mut Storefront<C>,
    ) -> Option<FetchOutcome> {
        if !self.can_go_previous(shop) {
            return None;
        }
        shop.dispatch_product(ProductAction::PreviousPage).await
    }

    /// Whether the "previous" control is enabled.
    pub fn can_go_previous<C: CatalogApi>(&self, shop: &Storefront<C>) -> bool {
        shop.products().current_page() > 1
    }

    /// Add a product from the current grid to the cart.
    pub fn add_to_cart<C: CatalogApi>(
        &self,
        shop: &mut Storefront<C>,
        id: ProductId,
    ) -> Result<(), CommerceError> {
        let product = shop
            .products()
            .items()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CommerceError::ProductNotFound(id))?;
        shop.dispatch_cart(CartAction::Add(product))
    }

    /// Decide what the grid shows.
    pub fn display<'a, C: CatalogApi>(&self, shop: &'a Storefront<C>) -> ListDisplay<'a> {
        let products = shop.products();
        if products.is_loading() {
            return ListDisplay::Loading;
        }

        match (products.items(), products.last_error()) {
            ([], Some(err)) => ListDisplay::Failed(err),
            ([], None) => ListDisplay::Empty,
            (items, error) => ListDisplay::Products { items, error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn shop() -> Storefront<InMemoryCatalog> {
        let mut products: Vec<Product> = (1..=12)
            .map(|i| Product::new(i, format!("Item {i}"), 3.0))
            .collect();
        products[4].title = "Floor Lamp".to_string();
        Storefront::new(InMemoryCatalog::new(products))
    }

    #[tokio::test]
    async fn test_draft_not_committed_until_submit() {
        let mut shop = shop();
        let mut view = ProductListView::new(&shop);
        view.mount(&mut shop).await;

        view.set_draft("lamp");
        assert_eq!(shop.products().search_term(), "");
        assert_eq!(shop.catalog().requests().len(), 1);

        view.submit_search(&mut shop).await;
        assert_eq!(shop.products().search_term(), "lamp");
        assert_eq!(shop.products().items().len(), 1);
    }

    #[tokio::test]
    async fn test_previous_disabled_on_first_page() {
        let mut shop = shop();
        let view = ProductListView::new(&shop);
        view.mount(&mut shop).await;

        assert!(!view.can_go_previous(&shop));
        assert!(view.previous_page(&mut shop).await.is_none());

        view.next_page(&mut shop).await;
        assert!(view.can_go_previous(&shop));
        assert_eq!(shop.products().items().len(), 2);
    }

    #[tokio::test]
    async fn test_add_to_cart_from_grid() {
        let mut shop = shop();
        let view = ProductListView::new(&shop);
        view.mount(&mut shop).await;

        view.add_to_cart(&mut shop, ProductId::new(3)).unwrap();
        view.add_to_cart(&mut shop, ProductId::new(3)).unwrap();
        assert_eq!(shop.cart().cart().get(ProductId::new(3)).unwrap().quantity, 2);

        let err = view.add_to_cart(&mut shop, ProductId::new(11)).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound(ProductId::new(11)));
    }

    #[tokio::test]
    async fn test_unmount_resets_search_only() {
        let mut shop = shop();
        let mut view = ProductListView::new(&shop);
        view.set_draft("item");
        view.submit_search(&mut shop).await;
        shop.update_products(ProductAction::SetPage(2));

        view.unmount(&mut shop);
        assert_eq!(shop.products().search_term(), "");
        assert_eq!(shop.products().current_page(), 2);

        let reopened = ProductListView::new(&shop);
        assert_eq!(reopened.draft(), "");
    }

    #[tokio::test]
    async fn test_display_states() {
        let mut shop = shop();
        let view = ProductListView::new(&shop);
        assert_eq!(view.display(&shop), ListDisplay::Empty);

        shop.catalog().set_failing(true);
        view.mount(&mut shop).await;
        assert!(matches!(view.display(&shop), ListDisplay::Failed(_)));

        shop.catalog().set_failing(false);
        shop.refresh().await;
        assert!(matches!(
            view.display(&shop),
            ListDisplay::Products { error: None, .. }
        ));

        shop.catalog().set_failing(true);
        view.next_page(&mut shop).await;
        match view.display(&shop) {
            ListDisplay::Products { items, error } => {
                assert_eq!(items.len(), 10);
                assert!(error.is_some());
            }
            other => panic!("unexpected display: {other:?}"),
        }
    }
}
