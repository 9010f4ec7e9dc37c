use async_graphql::{Context, ID, Object, Result};

use super::{ProductNode, product_id, product_store};

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All products, in store order.
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductNode>> {
        let store = product_store(ctx)?;
        Ok(store.list()?.into_iter().map(ProductNode::from).collect())
    }

    async fn get_product_by_id(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ProductNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = product_store(ctx)?;
        Ok(store.get_by_id(&product_id(id))?.map(ProductNode::from))
    }

    /// Product price multiplied by its quantity.
    async fn get_product_total_price(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<f64>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = product_store(ctx)?;
        Ok(store.total_price(&product_id(id))?)
    }

    /// Sum of the quantities of all products.
    async fn get_total_qty_of_products(&self, ctx: &Context<'_>) -> Result<i32> {
        Ok(product_store(ctx)?.total_quantity()?)
    }
}
