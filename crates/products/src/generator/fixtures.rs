//! Catalog builders shared by the generator tests.

use std::collections::HashMap;

use variantgen_core::{OptionGroupId, OptionId, ProductId};

use crate::configurator::{ConfigOption, ConfiguratorEntry, OptionGroupRef};
use crate::price::Price;
use crate::product::Product;

/// Gross amount in cents with a 19% tax share as net.
pub(crate) fn usd(gross: i64) -> Price {
    Price::new(gross, gross * 100 / 119)
}

pub(crate) struct Catalog {
    pub product: Product,
    pub entries: Vec<ConfiguratorEntry>,
    options: HashMap<String, OptionId>,
}

impl Catalog {
    pub fn option(&self, name: &str) -> OptionId {
        self.options[name]
    }
}

pub(crate) struct CatalogBuilder {
    product: Product,
    entries: Vec<ConfiguratorEntry>,
    options: HashMap<String, OptionId>,
    groups: u32,
}

impl CatalogBuilder {
    pub fn new(name: &str, price: Price) -> Self {
        Self {
            product: Product::new(ProductId::new(), name, price).unwrap(),
            entries: Vec::new(),
            options: HashMap::new(),
            groups: 0,
        }
    }

    pub fn group(mut self, name: &str, options: &[(&str, Option<Price>)]) -> Self {
        let group = OptionGroupRef::new(OptionGroupId::new(), name, self.groups);
        self.groups += 1;
        for (option_name, surcharge) in options {
            let option_id = OptionId::new();
            let option = ConfigOption::new(option_id, *option_name, group.clone()).unwrap();
            let mut entry = ConfiguratorEntry::new(self.product.id_typed(), option);
            if let Some(price) = surcharge {
                entry = entry.with_surcharge(*price);
            }
            self.entries.push(entry);
            self.options.insert(option_name.to_string(), option_id);
        }
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            product: self.product,
            entries: self.entries,
            options: self.options,
        }
    }
}
