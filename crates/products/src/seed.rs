//! Fixed records the store starts with.

use catalog_core::ProductId;

use crate::product::Product;

/// The five products every freshly started process serves.
pub fn seed_products() -> Vec<Product> {
    [
        ("1", "Apple", 3.99, 2),
        ("2", "Banana", 1.99, 3),
        ("3", "Orange", 2.0, 4),
        ("4", "Mango", 5.5, 5),
        ("5", "Watermelon", 8.99, 2),
    ]
    .into_iter()
    .map(|(id, name, price, qty)| {
        Product::new(
            ProductId::new(id),
            Some(name.to_string()),
            Some(price),
            Some(qty),
        )
    })
    .collect()
}
