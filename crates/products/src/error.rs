use thiserror::Error;

use variantgen_core::{DomainError, ProductId};

use crate::repository::RepositoryError;

/// Why a variant generation call failed.
///
/// Every variant is raised before the batch is handed to the writer, except
/// `Repository`, which may also come from the write itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product exists but has no configurator entries (no variation axes).
    #[error("no configurator found for product {0}")]
    NoConfiguratorFound(ProductId),

    /// The configurator store returned an entry that belongs to another product.
    #[error("configurator entry of product {found} returned for product {expected}")]
    ConfiguratorMismatch {
        expected: ProductId,
        found: ProductId,
    },

    /// `count` saturates at `usize::MAX` when the true count does not fit.
    #[error("product {product_id} has {count} option combinations (limit {limit})")]
    CombinationLimitExceeded {
        product_id: ProductId,
        count: usize,
        limit: usize,
    },

    /// A variant's base price plus surcharges leaves the representable range.
    #[error("price of a variant of product {product_id} cannot be computed")]
    PriceOverflow {
        product_id: ProductId,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type GenerationResult<T> = Result<T, GenerationError>;
