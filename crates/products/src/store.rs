use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::product::{NewProduct, Product};
use crate::seed::seed_products;

/// In-memory product store.
///
/// Holds products in insertion order. Nothing is persisted: the contents live
/// exactly as long as the store value. Every read-modify-write sequence runs
/// under a single write guard, so concurrent callers never observe a
/// half-applied update or delete.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the fixed seed records.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// A store holding `products`, in the given order.
    ///
    /// Callers are responsible for passing unique ids.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products.read().map_err(|_| {
            tracing::warn!("product store lock poisoned");
            CatalogError::LockPoisoned
        })
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products.write().map_err(|_| {
            tracing::warn!("product store lock poisoned");
            CatalogError::LockPoisoned
        })
    }

    fn position(products: &[Product], id: &ProductId) -> Option<usize> {
        products.iter().position(|p| p.id() == id)
    }

    /// All products, in store order.
    pub fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// The first product with the given id, if any.
    pub fn get_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.read()?.iter().find(|p| p.id() == id).cloned())
    }

    /// `price * qty` of the matching product.
    ///
    /// `None` when no product matches or when the product lacks a price or a
    /// quantity.
    pub fn total_price(&self, id: &ProductId) -> CatalogResult<Option<f64>> {
        Ok(self
            .read()?
            .iter()
            .find(|p| p.id() == id)
            .and_then(Product::total_price))
    }

    /// Sum of `qty` over all products; a missing `qty` counts as 0.
    ///
    /// Fails with [`CatalogError::QuantityOverflow`] when the sum leaves the
    /// `i32` range.
    pub fn total_quantity(&self) -> CatalogResult<i32> {
        self.read()?
            .iter()
            .filter_map(Product::qty)
            .try_fold(0i32, i32::checked_add)
            .ok_or(CatalogError::QuantityOverflow)
    }

    /// Append a new product under a freshly generated id and return it.
    pub fn add(&self, new: NewProduct) -> CatalogResult<Product> {
        let mut products = self.write()?;

        let mut id = ProductId::generate();
        while Self::position(&products, &id).is_some() {
            id = ProductId::generate();
        }

        let product = new.into_product(id);
        products.push(product.clone());

        tracing::info!(product_id = %product.id(), "product added");
        Ok(product)
    }

    /// Replace the product sharing `product`'s id with `product`.
    ///
    /// This is a full replacement: fields left as `None` become `None` in the
    /// store. Returns `None` (and changes nothing) when no product has that id.
    pub fn update(&self, product: Product) -> CatalogResult<Option<Product>> {
        let mut products = self.write()?;

        let Some(idx) = Self::position(&products, product.id()) else {
            tracing::debug!(product_id = %product.id(), "update matched no product");
            return Ok(None);
        };

        products[idx] = product.clone();

        tracing::info!(product_id = %product.id(), "product updated");
        Ok(Some(product))
    }

    /// Remove the product with the given id and return it.
    ///
    /// Returns `None` (and changes nothing) when no product has that id.
    pub fn delete(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let mut products = self.write()?;

        let Some(idx) = Self::position(&products, id) else {
            tracing::debug!(product_id = %id, "delete matched no product");
            return Ok(None);
        };

        let removed = products.remove(idx);

        tracing::info!(product_id = %id, "product deleted");
        Ok(Some(removed))
    }
}
