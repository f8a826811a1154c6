//! Tenant-isolated implementations of the generator's collaborators.

pub mod configurators;
pub mod products;
pub mod variants;

pub use configurators::{InMemoryConfiguratorStore, TenantConfiguratorStore};
pub use products::{InMemoryProductStore, TenantProductStore};
pub use variants::{InMemoryVariantStore, StoredVariant, TenantVariantStore, WriteAck};
