//! Catalog listing

use std::path::Path;

use quickcart_core::Catalog;

pub fn list(
    catalog_path: &Path,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(catalog_path)?;

    let products: Vec<_> = match category {
        Some(category) => catalog.by_category(category),
        None => catalog.products().iter().collect(),
    };

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in products {
        println!(
            "{:<8} {:<28} ${:>8}  stock {:>3}  [{}]",
            product.id, product.name, product.price, product.stock, product.category
        );
    }

    Ok(())
}
