//! Catalog, cart and query types for TurboShop.
//!
//! - **Catalog**: products as served by the remote catalog service
//! - **Cart**: locally owned line items keyed by product id
//! - **Search**: the (page, search term) query key and its catalog path
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_commerce::{cart::Cart, search::ProductQuery};
//!
//! let mut cart = Cart::new();
//! cart.add(&product)?;
//! cart.add(&product)?;
//! assert_eq!(cart.get(product.id).map(|i| i.quantity), Some(2));
//!
//! let query = ProductQuery::new(2, "");
//! assert_eq!(query.path(), "/products?limit=10&skip=10");
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
