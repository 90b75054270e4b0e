//! Product and cart state containers for TurboShop.
//!
//! This crate provides:
//! - `ProductStore` - query state for the remote catalog (page, search term,
//!   loading flag, current results) with latest-request-wins fetch tickets
//! - `CartStore` - locally owned line items keyed by product id
//! - `CatalogApi` - the seam to the catalog service, with `HttpCatalog` for
//!   the real API and `InMemoryCatalog` for tests and demos
//! - `Storefront` - explicit composition of both stores and a catalog
//! - `ProductListView` - the product list page: search draft, pagination,
//!   add-to-cart, mount/unmount

mod cart;
mod catalog;
mod products;
mod storefront;
mod view;

pub use cart::*;
pub use catalog::*;
pub use products::*;
pub use storefront::*;
pub use view::*;

pub use turbo_data::FetchError;
