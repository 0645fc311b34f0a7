//! Shopping domain module.
//!
//! A shopper's cart bound to the store inventory, plus checkout. Checkout turns
//! the cart into an [`Order`] receipt and decrements inventory accordingly.

pub mod cart;
pub mod error;
pub mod order;
pub mod shopping;

pub use cart::{CartLine, CartState, ShoppingCart};
pub use error::ShoppingError;
pub use order::Order;
pub use shopping::Shopping;
