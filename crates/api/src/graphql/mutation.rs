use async_graphql::{Context, ID, Object, Result};

use catalog_products::{NewProduct, Product};

use super::{ProductNode, product_id, product_store};

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_product(
        &self,
        ctx: &Context<'_>,
        product_name: Option<String>,
        price: Option<f64>,
        qty: Option<i32>,
    ) -> Result<ProductNode> {
        let store = product_store(ctx)?;
        let added = store.add(NewProduct {
            product_name,
            price,
            qty,
        })?;
        Ok(added.into())
    }

    /// Replace a product; fields not passed are cleared.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        product_name: Option<String>,
        price: Option<f64>,
        qty: Option<i32>,
    ) -> Result<Option<ProductNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = product_store(ctx)?;
        let replacement = Product::new(product_id(id), product_name, price, qty);
        Ok(store.update(replacement)?.map(ProductNode::from))
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ProductNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = product_store(ctx)?;
        Ok(store.delete(&product_id(id))?.map(ProductNode::from))
    }
}
