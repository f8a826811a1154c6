//! Caller context threaded through every read and write.

use serde::{Deserialize, Serialize};

use crate::id::TenantId;

/// Per-call context.
///
/// Every store lookup and every write is scoped to `tenant_id`; collaborators
/// must never return records that belong to another tenant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    tenant_id: TenantId,
}

impl Context {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

impl From<TenantId> for Context {
    fn from(tenant_id: TenantId) -> Self {
        Self::new(tenant_id)
    }
}
