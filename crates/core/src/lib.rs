//! QuickCart Core Library
//!
//! Storage adapter, account directory, and cart ledger for the QuickCart
//! storefront demo. Everything is local-first: state lives in an embedded
//! key-value store owned by the composing application.

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod invariants;
pub mod models;
pub mod storage;

pub use accounts::{
    is_valid_email, AccountDirectory, AuthError, Credentials, NewAccount, PasswordStrength,
};
pub use cart::{CartError, CartLedger};
pub use catalog::{Catalog, CatalogError};
pub use error::{Error, Result};
pub use models::{Account, AccountProfile, CartItem, CartTotals, Product, Receipt, Session};
pub use storage::{keys, MemoryBackend, SqliteBackend, StorageBackend, Store};
