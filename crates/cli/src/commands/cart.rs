//! Cart commands: add, remove, set, show, clear, checkout

use std::path::Path;

use quickcart_core::{CartLedger, Catalog, Store};

pub fn add(
    store: &Store,
    catalog_path: &Path,
    product_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(catalog_path)?;
    let Some(product) = catalog.get(product_id) else {
        return Err(format!("No product '{product_id}' in the catalog").into());
    };

    let cart = CartLedger::new(store);
    cart.add(product)?;
    println!("{} added to cart ({} items).", product.name, cart.item_count());
    Ok(())
}

pub fn remove(store: &Store, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartLedger::new(store);
    cart.remove(product_id)?;
    println!("Removed {product_id} ({} items left).", cart.item_count());
    Ok(())
}

pub fn set_quantity(
    store: &Store,
    product_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartLedger::new(store);
    cart.set_quantity(product_id, quantity)?;
    println!("Cart now holds {} items.", cart.item_count());
    Ok(())
}

pub fn show(store: &Store) {
    let cart = CartLedger::new(store);
    let items = cart.items();

    if items.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in &items {
        println!(
            "{:>3} x {:<28} ${:>8}",
            item.quantity,
            item.product.name,
            item.line_total()
        );
    }

    let totals = cart.totals();
    println!("{:-<46}", "");
    println!("{:>34} ${:>8}", "Subtotal:", totals.subtotal);
    println!("{:>34} ${:>8}", "Tax (8%):", totals.tax);
    println!("{:>34} ${:>8}", "Total:", totals.total);
}

pub fn clear(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartLedger::new(store);
    cart.clear()?;
    println!("Cart cleared.");
    Ok(())
}

pub fn checkout(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartLedger::new(store);
    let receipt = cart.checkout()?;

    println!("Order placed! (Demo - nothing was charged.)");
    println!("Order id: {}", receipt.order_id);
    println!("Items: {}", receipt.items.len());
    println!("Total: ${}", receipt.totals.total);
    Ok(())
}
