//! End-to-end flows through the storefront.

use turbo_commerce::catalog::Product;
use turbo_commerce::ProductId;
use turbo_store::{
    CartAction, FetchOutcome, InMemoryCatalog, ListDisplay, ProductAction, ProductListView,
    Storefront,
};

fn catalog() -> InMemoryCatalog {
    let mut products: Vec<Product> = (1..=40)
        .map(|i| Product::new(i, format!("Product {i}"), 5.0 + i as f64))
        .collect();
    products[6].title = "Desk Lamp".to_string();
    products[17].title = "Lamp Shade".to_string();
    products[31].category = "lighting".to_string();
    products[31].description = "Bedside lamp".to_string();
    InMemoryCatalog::new(products)
}

#[tokio::test]
async fn browse_then_search() {
    let mut shop = Storefront::new(catalog());
    let mut view = ProductListView::new(&shop);

    assert_eq!(shop.products().current_page(), 1);
    assert_eq!(shop.products().search_term(), "");
    assert!(shop.products().items().is_empty());

    let outcome = view.mount(&mut shop).await;
    assert_eq!(outcome, Some(FetchOutcome::Fulfilled { count: 10 }));
    assert_eq!(shop.products().items().len(), 10);
    assert!(!shop.products().is_loading());

    view.set_draft("lamp");
    view.submit_search(&mut shop).await;

    assert_eq!(shop.products().search_term(), "lamp");
    assert_eq!(shop.products().current_page(), 1);
    assert_eq!(
        shop.catalog().requests().last().map(String::as_str),
        Some("/products/search?q=lamp")
    );

    let ids: Vec<u64> = shop.products().items().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![7, 18, 32]);
}

#[tokio::test]
async fn page_two_requests_skip_ten() {
    let mut shop = Storefront::new(catalog());
    shop.dispatch_product(ProductAction::SetPage(2)).await;

    assert_eq!(
        shop.catalog().requests(),
        vec!["/products?limit=10&skip=10".to_string()]
    );
    assert_eq!(shop.products().items()[0].id, ProductId::new(11));
}

#[tokio::test]
async fn search_ignores_current_page() {
    let mut shop = Storefront::new(catalog());
    shop.update_products(ProductAction::SetPage(3));
    shop.dispatch_product(ProductAction::SetSearchTerm("phone".to_string()))
        .await;

    assert_eq!(shop.products().current_page(), 1);
    assert_eq!(
        shop.catalog().requests(),
        vec!["/products/search?q=phone".to_string()]
    );
    assert!(shop.products().items().is_empty());
}

#[tokio::test]
async fn failed_refetch_keeps_previous_results() {
    let mut shop = Storefront::new(catalog());
    shop.sync().await;
    let before: Vec<Product> = shop.products().items().to_vec();

    shop.catalog().set_failing(true);
    let outcome = shop.dispatch_product(ProductAction::NextPage).await;

    assert!(matches!(outcome, Some(FetchOutcome::Rejected(_))));
    assert!(!shop.products().is_loading());
    assert_eq!(shop.products().items(), before.as_slice());

    let view = ProductListView::new(&shop);
    assert!(matches!(
        view.display(&shop),
        ListDisplay::Products { error: Some(_), .. }
    ));
}

#[tokio::test]
async fn cart_scenario() {
    let mut shop = Storefront::new(catalog());
    let lamp = Product::new(5, "Lamp", 12.0);

    shop.dispatch_cart(CartAction::Add(lamp.clone())).unwrap();
    shop.dispatch_cart(CartAction::Add(lamp)).unwrap();
    assert_eq!(shop.cart().items()[0].quantity, 2);

    shop.dispatch_cart(CartAction::SetQuantity {
        id: ProductId::new(5),
        quantity: 7,
    })
    .unwrap();
    assert_eq!(shop.cart().items()[0].quantity, 7);
    assert!((shop.cart().cart().subtotal() - 84.0).abs() < 1e-9);

    shop.dispatch_cart(CartAction::Remove(ProductId::new(5)))
        .unwrap();
    assert!(shop.cart().items().is_empty());
}
