//! Product catalog module.
//!
//! Products are owned by the remote catalog service and replaced wholesale
//! on every fetch.

mod product;

pub use product::{Dimensions, Product, ProductsPage, Review};
