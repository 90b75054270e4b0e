//! Shopping cart module.
//!
//! Contains the cart and its line items.

mod cart;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
