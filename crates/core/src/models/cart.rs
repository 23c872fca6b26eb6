//! Cart line items, derived totals, and checkout receipts

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

/// One cart line: a product copied by value plus its quantity
///
/// Serialized flat, so the persisted shape is the product's fields with a
/// `quantity` alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line subtotal (price x quantity), unrounded
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Totals derived from the ledger, each rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Snapshot of a placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub placed_at: DateTime<Utc>,
}
