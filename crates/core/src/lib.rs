//! `variantgen-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod context;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use context::Context;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ConfiguratorEntryId, OptionGroupId, OptionId, ProductId, TenantId};
pub use value_object::ValueObject;
