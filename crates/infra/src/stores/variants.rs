use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::info;

use variantgen_core::{Context, ProductId, TenantId};
use variantgen_products::{BatchWriter, RepositoryError, VariantRecord};

use crate::read_model::{InMemoryTenantStore, TenantStore};

/// A persisted variant: the generated record plus the identity the store gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVariant {
    pub id: ProductId,
    /// Global write order, used to list variants in the order they were created.
    pub sequence: u64,
    pub record: VariantRecord,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgment of one batch write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAck {
    pub tenant_id: TenantId,
    /// Ids assigned to the created variants, in batch order.
    pub created: Vec<ProductId>,
    pub written_at: DateTime<Utc>,
}

impl WriteAck {
    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

/// Batch writer over a tenant store. Every created variant gets a fresh id.
#[derive(Debug)]
pub struct TenantVariantStore<S> {
    store: S,
    next_sequence: AtomicU64,
}

pub type InMemoryVariantStore = TenantVariantStore<InMemoryTenantStore<ProductId, StoredVariant>>;

impl<S> TenantVariantStore<S>
where
    S: TenantStore<ProductId, StoredVariant>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            next_sequence: AtomicU64::new(1),
        }
    }

    pub fn get(&self, ctx: &Context, id: &ProductId) -> Option<StoredVariant> {
        self.store.get(ctx.tenant_id(), id)
    }

    /// Variants of `parent_id`, in creation order.
    pub fn variants_of(&self, ctx: &Context, parent_id: ProductId) -> Vec<StoredVariant> {
        let mut variants: Vec<StoredVariant> = self
            .store
            .list(ctx.tenant_id())
            .into_iter()
            .filter(|v| v.record.parent_id() == parent_id)
            .collect();
        variants.sort_by_key(|v| v.sequence);
        variants
    }
}

impl InMemoryVariantStore {
    pub fn in_memory() -> Self {
        Self::new(InMemoryTenantStore::new())
    }
}

impl<S> BatchWriter for TenantVariantStore<S>
where
    S: TenantStore<ProductId, StoredVariant>,
{
    type Ack = WriteAck;

    fn create(
        &self,
        variants: Vec<VariantRecord>,
        ctx: &Context,
    ) -> Result<WriteAck, RepositoryError> {
        let tenant_id = ctx.tenant_id();
        let written_at = Utc::now();

        let mut created = Vec::with_capacity(variants.len());
        for record in variants {
            let id = ProductId::new();
            let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
            self.store.upsert(
                tenant_id,
                id,
                StoredVariant {
                    id,
                    sequence,
                    record,
                    created_at: written_at,
                },
            );
            created.push(id);
        }

        info!(%tenant_id, created = created.len(), "variant batch written");
        Ok(WriteAck {
            tenant_id,
            created,
            written_at,
        })
    }
}
