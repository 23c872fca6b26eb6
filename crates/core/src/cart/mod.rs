//! Cart ledger
//!
//! The ordered list of cart line items, persisted under one storage key.
//! At most one line exists per product id; a quantity reaching zero removes
//! the line. Stock is never checked or decremented here.

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::Error;
use crate::invariants;
use crate::models::{CartItem, CartTotals, Product, Receipt};
use crate::storage::{keys, Store};

/// Flat demo tax rate applied to the subtotal
fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Why a checkout was rejected
#[derive(Error, Debug)]
pub enum CartError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Storage(#[from] Error),
}

/// The cart line items for the active session
pub struct CartLedger<'a> {
    store: &'a Store,
}

impl<'a> CartLedger<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Current ledger snapshot
    pub fn items(&self) -> Vec<CartItem> {
        self.store.get(keys::CART, Vec::new())
    }

    /// Add one unit of a product, merging with an existing line
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&self, product: &Product) -> Result<(), Error> {
        let mut items = self.items();
        match items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => items.push(CartItem::new(product.clone())),
        }
        self.save(&items)
    }

    /// Remove a line entirely; unknown ids are a no-op
    pub fn remove(&self, product_id: &str) -> Result<(), Error> {
        let mut items = self.items();
        items.retain(|item| item.product.id != product_id);
        self.save(&items)
    }

    /// Overwrite a line's quantity
    ///
    /// A quantity below 1 behaves as [`remove`](Self::remove); unknown ids
    /// are a no-op.
    pub fn set_quantity(&self, product_id: &str, quantity: u32) -> Result<(), Error> {
        if quantity < 1 {
            return self.remove(product_id);
        }

        let mut items = self.items();
        if let Some(item) = items.iter_mut().find(|item| item.product.id == product_id) {
            item.quantity = quantity;
            return self.save(&items);
        }

        Ok(())
    }

    /// Empty the ledger unconditionally
    pub fn clear(&self) -> Result<(), Error> {
        self.save(&[])
    }

    /// Total units across all lines, not the number of lines
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|item| item.quantity).sum()
    }

    /// Subtotal, tax, and grand total for the current ledger
    pub fn totals(&self) -> CartTotals {
        Self::totals_for(&self.items())
    }

    /// Place the demo order: snapshot the ledger into a receipt, clear it
    pub fn checkout(&self) -> Result<Receipt, CartError> {
        let items = self.items();
        if items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let receipt = Receipt {
            order_id: Uuid::new_v4(),
            totals: Self::totals_for(&items),
            items,
            placed_at: Utc::now(),
        };

        self.clear()?;
        info!(order_id = %receipt.order_id, total = %receipt.totals.total, "order placed");
        Ok(receipt)
    }

    fn totals_for(items: &[CartItem]) -> CartTotals {
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        let subtotal = round_cents(subtotal);
        let tax = round_cents(subtotal * tax_rate());
        let total = round_cents(subtotal + tax);

        CartTotals {
            subtotal,
            tax,
            total,
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), Error> {
        invariants::assert_cart_invariants(items);
        self.store.set(keys::CART, &items)
    }
}

/// Round to 2 decimal places for display
fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
