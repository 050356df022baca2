//! Shopping cart

mod money;
pub mod store;

pub use store::{CART_KEY, CartStore};
