//! Configurator entries: the (product, option, surcharge) associations that
//! describe a product's axes of variation.

use serde::{Deserialize, Serialize};

use variantgen_core::{
    ConfiguratorEntryId, DomainError, DomainResult, Entity, OptionGroupId, OptionId, ProductId,
};

use crate::price::Price;

/// Option group an option belongs to (one axis of variation, e.g. "Color").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroupRef {
    pub id: OptionGroupId,
    pub name: String,
    /// Display position hint as stored with the group. Generation orders
    /// groups by first appearance, not by this value.
    pub position: u32,
}

impl OptionGroupRef {
    pub fn new(id: OptionGroupId, name: impl Into<String>, position: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}

/// A selectable option (e.g. "Red") together with its owning group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    pub id: OptionId,
    pub name: String,
    pub group: OptionGroupRef,
}

impl ConfigOption {
    pub fn new(id: OptionId, name: impl Into<String>, group: OptionGroupRef) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("option name cannot be empty"));
        }
        Ok(Self { id, name, group })
    }
}

/// Associates a product with one option and carries that option's surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguratorEntry {
    id: ConfiguratorEntryId,
    product_id: ProductId,
    option: ConfigOption,
    surcharge: Option<Price>,
}

impl ConfiguratorEntry {
    pub fn new(product_id: ProductId, option: ConfigOption) -> Self {
        Self {
            id: ConfiguratorEntryId::new(),
            product_id,
            option,
            surcharge: None,
        }
    }

    pub fn with_id(mut self, id: ConfiguratorEntryId) -> Self {
        self.id = id;
        self
    }

    pub fn with_surcharge(mut self, surcharge: Price) -> Self {
        self.surcharge = Some(surcharge);
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn option(&self) -> &ConfigOption {
        &self.option
    }

    pub fn option_id(&self) -> OptionId {
        self.option.id
    }

    pub fn option_name(&self) -> &str {
        &self.option.name
    }

    pub fn group_id(&self) -> OptionGroupId {
        self.option.group.id
    }

    /// Surcharge as stored (may be present but zero).
    pub fn surcharge(&self) -> Option<&Price> {
        self.surcharge.as_ref()
    }

    /// Surcharge that actually contributes to a variant price: absent and
    /// all-zero surcharges are both "empty".
    pub fn effective_surcharge(&self) -> Option<Price> {
        self.surcharge.filter(|price| !price.is_zero())
    }
}

impl Entity for ConfiguratorEntry {
    type Id = ConfiguratorEntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
