use async_graphql::{ID, SimpleObject};

use catalog_core::Entity;
use catalog_products::Product;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductNode {
    pub id: ID,
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub qty: Option<i32>,
}

impl From<Product> for ProductNode {
    fn from(p: Product) -> Self {
        Self {
            id: ID(p.id().to_string()),
            product_name: p.product_name().map(str::to_owned),
            price: p.price(),
            qty: p.qty(),
        }
    }
}
