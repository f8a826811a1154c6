use variantgen_core::{Context, ProductId};
use variantgen_products::{ConfiguratorEntry, ConfiguratorReader, RepositoryError};

use crate::read_model::{InMemoryTenantStore, TenantStore};

/// Configurator reader over a tenant store.
///
/// Entries are kept per product in insertion order, which is the order
/// `search` returns them in.
#[derive(Debug, Default)]
pub struct TenantConfiguratorStore<S> {
    store: S,
}

pub type InMemoryConfiguratorStore =
    TenantConfiguratorStore<InMemoryTenantStore<ProductId, Vec<ConfiguratorEntry>>>;

impl<S> TenantConfiguratorStore<S>
where
    S: TenantStore<ProductId, Vec<ConfiguratorEntry>>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append one entry to the configurator set of `entry.product_id()`.
    pub fn add(&self, ctx: &Context, entry: ConfiguratorEntry) {
        let product_id = entry.product_id();
        let mut entry = Some(entry);
        self.store.update_with(
            ctx.tenant_id(),
            product_id,
            &mut |slot: &mut Option<Vec<ConfiguratorEntry>>| {
                if let Some(entry) = entry.take() {
                    slot.get_or_insert_with(Vec::new).push(entry);
                }
            },
        );
    }

    /// Replace the whole configurator set of a product.
    pub fn replace(&self, ctx: &Context, product_id: ProductId, entries: Vec<ConfiguratorEntry>) {
        self.store.upsert(ctx.tenant_id(), product_id, entries);
    }
}

impl InMemoryConfiguratorStore {
    pub fn in_memory() -> Self {
        Self::new(InMemoryTenantStore::new())
    }
}

impl<S> ConfiguratorReader for TenantConfiguratorStore<S>
where
    S: TenantStore<ProductId, Vec<ConfiguratorEntry>>,
{
    fn search(
        &self,
        product_id: ProductId,
        ctx: &Context,
    ) -> Result<Vec<ConfiguratorEntry>, RepositoryError> {
        Ok(self
            .store
            .get(ctx.tenant_id(), &product_id)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variantgen_core::{OptionGroupId, OptionId, TenantId};
    use variantgen_products::{ConfigOption, OptionGroupRef};

    fn entry(product_id: ProductId, name: &str) -> ConfiguratorEntry {
        let group = OptionGroupRef::new(OptionGroupId::new(), "Color", 0);
        ConfiguratorEntry::new(
            product_id,
            ConfigOption::new(OptionId::new(), name, group).unwrap(),
        )
    }

    #[test]
    fn search_preserves_insertion_order() {
        let store = InMemoryConfiguratorStore::in_memory();
        let ctx = Context::new(TenantId::new());
        let product_id = ProductId::new();

        for name in ["Red", "Blue", "Green"] {
            store.add(&ctx, entry(product_id, name));
        }

        let names: Vec<String> = store
            .search(product_id, &ctx)
            .unwrap()
            .iter()
            .map(|e| e.option_name().to_string())
            .collect();
        assert_eq!(names, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn search_is_scoped_to_product_and_tenant() {
        let store = InMemoryConfiguratorStore::in_memory();
        let ctx = Context::new(TenantId::new());
        let product_id = ProductId::new();
        store.add(&ctx, entry(product_id, "Red"));

        assert!(store.search(ProductId::new(), &ctx).unwrap().is_empty());
        assert!(
            store
                .search(product_id, &Context::new(TenantId::new()))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn replace_overwrites_previous_set() {
        let store = InMemoryConfiguratorStore::in_memory();
        let ctx = Context::new(TenantId::new());
        let product_id = ProductId::new();
        store.add(&ctx, entry(product_id, "Red"));

        store.replace(&ctx, product_id, vec![entry(product_id, "Blue")]);

        let entries = store.search(product_id, &ctx).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].option_name(), "Blue");
    }
}
