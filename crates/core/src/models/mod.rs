//! Core data models

mod account;
mod cart;
mod product;

pub use account::{Account, AccountProfile, Session};
pub use cart::{CartItem, CartTotals, Receipt};
pub use product::Product;
