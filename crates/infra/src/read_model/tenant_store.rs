use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use variantgen_core::TenantId;

/// Tenant-isolated key/value store backing the in-memory collaborators.
pub trait TenantStore<K, V>: Send + Sync {
    fn get(&self, tenant_id: TenantId, key: &K) -> Option<V>;
    fn upsert(&self, tenant_id: TenantId, key: K, value: V);
    /// Read-modify-write of one key under a single write lock.
    fn update_with(&self, tenant_id: TenantId, key: K, f: &mut dyn FnMut(&mut Option<V>));
    fn list(&self, tenant_id: TenantId) -> Vec<V>;
}

impl<K, V, S> TenantStore<K, V> for Arc<S>
where
    S: TenantStore<K, V> + ?Sized,
{
    fn get(&self, tenant_id: TenantId, key: &K) -> Option<V> {
        (**self).get(tenant_id, key)
    }

    fn upsert(&self, tenant_id: TenantId, key: K, value: V) {
        (**self).upsert(tenant_id, key, value)
    }

    fn update_with(&self, tenant_id: TenantId, key: K, f: &mut dyn FnMut(&mut Option<V>)) {
        (**self).update_with(tenant_id, key, f)
    }

    fn list(&self, tenant_id: TenantId) -> Vec<V> {
        (**self).list(tenant_id)
    }
}

/// In-memory tenant-isolated store for tests/dev.
///
/// A poisoned lock is recovered rather than reported: every mutation here is a
/// single map operation, so the map is never left half-written.
#[derive(Debug)]
pub struct InMemoryTenantStore<K, V> {
    inner: RwLock<HashMap<(TenantId, K), V>>,
}

impl<K, V> InMemoryTenantStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryTenantStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TenantStore<K, V> for InMemoryTenantStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, tenant_id: TenantId, key: &K) -> Option<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&(tenant_id, key.clone())).cloned()
    }

    fn upsert(&self, tenant_id: TenantId, key: K, value: V) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert((tenant_id, key), value);
    }

    fn update_with(&self, tenant_id: TenantId, key: K, f: &mut dyn FnMut(&mut Option<V>)) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let slot_key = (tenant_id, key);
        let mut slot = map.remove(&slot_key);
        f(&mut slot);
        if let Some(value) = slot {
            map.insert(slot_key, value);
        }
    }

    fn list(&self, tenant_id: TenantId) -> Vec<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.iter()
            .filter_map(|((t, _k), v)| if *t == tenant_id { Some(v.clone()) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_isolated_per_tenant() {
        let store: InMemoryTenantStore<u32, &'static str> = InMemoryTenantStore::new();
        let (a, b) = (TenantId::new(), TenantId::new());

        store.upsert(a, 1, "a-one");
        store.upsert(b, 1, "b-one");

        assert_eq!(store.get(a, &1), Some("a-one"));
        assert_eq!(store.get(b, &1), Some("b-one"));
        assert_eq!(store.list(a), vec!["a-one"]);
        assert_eq!(store.get(a, &2), None);
    }

    #[test]
    fn update_with_creates_modifies_and_removes() {
        let store: InMemoryTenantStore<u32, Vec<u32>> = InMemoryTenantStore::new();
        let tenant = TenantId::new();

        store.update_with(tenant, 7, &mut |slot: &mut Option<Vec<u32>>| slot.get_or_insert_with(Vec::new).push(1));
        store.update_with(tenant, 7, &mut |slot: &mut Option<Vec<u32>>| slot.get_or_insert_with(Vec::new).push(2));
        assert_eq!(store.get(tenant, &7), Some(vec![1, 2]));

        store.update_with(tenant, 7, &mut |slot: &mut Option<Vec<u32>>| *slot = None);
        assert_eq!(store.get(tenant, &7), None);
    }
}
