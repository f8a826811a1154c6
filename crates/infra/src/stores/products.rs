use std::collections::HashMap;

use variantgen_core::{Context, ProductId};
use variantgen_products::{Product, ProductReader, RepositoryError};

use crate::read_model::{InMemoryTenantStore, TenantStore};

/// Product reader over a tenant store.
#[derive(Debug, Default)]
pub struct TenantProductStore<S> {
    store: S,
}

pub type InMemoryProductStore = TenantProductStore<InMemoryTenantStore<ProductId, Product>>;

impl<S> TenantProductStore<S>
where
    S: TenantStore<ProductId, Product>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn insert(&self, ctx: &Context, product: Product) {
        self.store.upsert(ctx.tenant_id(), product.id_typed(), product);
    }
}

impl InMemoryProductStore {
    pub fn in_memory() -> Self {
        Self::new(InMemoryTenantStore::new())
    }
}

impl<S> ProductReader for TenantProductStore<S>
where
    S: TenantStore<ProductId, Product>,
{
    fn read(
        &self,
        ids: &[ProductId],
        ctx: &Context,
    ) -> Result<HashMap<ProductId, Product>, RepositoryError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.store.get(ctx.tenant_id(), id).map(|p| (*id, p)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variantgen_core::TenantId;
    use variantgen_products::Price;

    #[test]
    fn read_returns_only_known_ids_of_the_calling_tenant() {
        let store = InMemoryProductStore::in_memory();
        let ctx = Context::new(TenantId::new());
        let other = Context::new(TenantId::new());
        let shirt = Product::new(ProductId::new(), "Shirt", Price::new(2000, 1681)).unwrap();
        store.insert(&ctx, shirt.clone());

        let missing = ProductId::new();
        let found = store.read(&[shirt.id_typed(), missing], &ctx).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found.get(&shirt.id_typed()), Some(&shirt));

        assert!(store.read(&[shirt.id_typed()], &other).unwrap().is_empty());
    }
}
