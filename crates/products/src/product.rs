use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};

/// A product record.
///
/// Every attribute except the identifier is nullable: callers may create or
/// replace a product with any subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    product_name: Option<String>,
    price: Option<f64>,
    qty: Option<i32>,
}

impl Product {
    pub fn new(
        id: ProductId,
        product_name: Option<String>,
        price: Option<f64>,
        qty: Option<i32>,
    ) -> Self {
        Self {
            id,
            product_name,
            price,
            qty,
        }
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn qty(&self) -> Option<i32> {
        self.qty
    }

    /// `price * qty`, or `None` when either is missing.
    pub fn total_price(&self) -> Option<f64> {
        Some(self.price? * f64::from(self.qty?))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields of a product that is about to be added (the store assigns the id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub qty: Option<i32>,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product::new(id, self.product_name, self.price, self.qty)
    }
}
