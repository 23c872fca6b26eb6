//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{Account, CartItem};

/// Validate that a cart ledger is internally consistent
pub fn assert_cart_invariants(items: &[CartItem]) {
    for item in items {
        debug_assert!(
            item.quantity >= 1,
            "Cart line for product {} has zero quantity",
            item.product.id
        );
    }

    for (i, item) in items.iter().enumerate() {
        debug_assert!(
            !items[..i]
                .iter()
                .any(|other| other.product.id == item.product.id),
            "Cart has duplicate lines for product {}",
            item.product.id
        );
    }
}

/// Validate that the account directory is internally consistent
pub fn assert_directory_invariants(accounts: &[Account]) {
    for (i, account) in accounts.iter().enumerate() {
        debug_assert!(
            !accounts[..i]
                .iter()
                .any(|other| other.username == account.username || other.email == account.email),
            "Directory has duplicate account for {}",
            account.username
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use rust_decimal::Decimal;

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem {
            product: Product {
                id: id.to_string(),
                name: id.to_string(),
                price: Decimal::ONE,
                stock: 1,
                category: String::new(),
                description: String::new(),
                image: String::new(),
            },
            quantity,
        }
    }

    #[test]
    fn test_valid_cart() {
        assert_cart_invariants(&[item("a", 1), item("b", 3)]);
    }

    #[test]
    #[should_panic(expected = "zero quantity")]
    fn test_zero_quantity_line() {
        assert_cart_invariants(&[item("a", 0)]);
    }

    #[test]
    #[should_panic(expected = "duplicate lines")]
    fn test_duplicate_cart_lines() {
        assert_cart_invariants(&[item("a", 1), item("a", 2)]);
    }

    #[test]
    fn test_valid_directory() {
        let accounts = vec![
            Account::new("a".into(), "a@x.co".into(), "h".into()),
            Account::new("b".into(), "b@x.co".into(), "h".into()),
        ];
        assert_directory_invariants(&accounts);
    }

    #[test]
    #[should_panic(expected = "duplicate account")]
    fn test_duplicate_username() {
        let accounts = vec![
            Account::new("a".into(), "a@x.co".into(), "h".into()),
            Account::new("a".into(), "other@x.co".into(), "h".into()),
        ];
        assert_directory_invariants(&accounts);
    }
}
