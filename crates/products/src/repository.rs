//! Collaborator contracts the generator reads from and writes to.
//!
//! The generator treats these as synchronous black boxes: no retries, no
//! backoff. Implementations must scope every call to `ctx.tenant_id()`.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use variantgen_core::{Context, ProductId};

use crate::configurator::ConfiguratorEntry;
use crate::product::Product;
use crate::variant::VariantRecord;

/// Failure reported by a collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or read.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The store refused a write.
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Reads products by id. Missing ids are simply absent from the result.
pub trait ProductReader: Send + Sync {
    fn read(
        &self,
        ids: &[ProductId],
        ctx: &Context,
    ) -> Result<HashMap<ProductId, Product>, RepositoryError>;
}

/// Searches configurator entries of one product, in store order.
pub trait ConfiguratorReader: Send + Sync {
    fn search(
        &self,
        product_id: ProductId,
        ctx: &Context,
    ) -> Result<Vec<ConfiguratorEntry>, RepositoryError>;
}

/// Persists a batch of generated variants.
pub trait BatchWriter: Send + Sync {
    /// Write acknowledgment, passed through to the generator's caller unchanged.
    type Ack;

    fn create(&self, variants: Vec<VariantRecord>, ctx: &Context)
    -> Result<Self::Ack, RepositoryError>;
}

impl<S> ProductReader for Arc<S>
where
    S: ProductReader + ?Sized,
{
    fn read(
        &self,
        ids: &[ProductId],
        ctx: &Context,
    ) -> Result<HashMap<ProductId, Product>, RepositoryError> {
        (**self).read(ids, ctx)
    }
}

impl<S> ConfiguratorReader for Arc<S>
where
    S: ConfiguratorReader + ?Sized,
{
    fn search(
        &self,
        product_id: ProductId,
        ctx: &Context,
    ) -> Result<Vec<ConfiguratorEntry>, RepositoryError> {
        (**self).search(product_id, ctx)
    }
}

impl<S> BatchWriter for Arc<S>
where
    S: BatchWriter + ?Sized,
{
    type Ack = S::Ack;

    fn create(
        &self,
        variants: Vec<VariantRecord>,
        ctx: &Context,
    ) -> Result<Self::Ack, RepositoryError> {
        (**self).create(variants, ctx)
    }
}
