//! Product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product
///
/// Supplied by the catalog manifest and treated as read-only; nothing in
/// this crate creates or mutates products. `stock` is display-only and is
/// never decremented by cart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}
