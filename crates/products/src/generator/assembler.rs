//! Turns one combination into a `VariantRecord`.

use std::collections::HashMap;

use variantgen_core::{DomainResult, OptionId};

use crate::configurator::ConfiguratorEntry;
use crate::product::Product;
use crate::variant::{VariantRecord, Variation};

use super::combination::Combination;
use super::index::OptionIndex;
use super::pricing::aggregate_price;

/// Assembles variant records of one parent product.
///
/// Built once per generation call; holds an option -> entry lookup so each
/// combination resolves its entries without rescanning the configurator set.
#[derive(Debug)]
pub struct VariantAssembler<'a> {
    product: &'a Product,
    index: &'a OptionIndex,
    entries: HashMap<OptionId, &'a ConfiguratorEntry>,
}

impl<'a> VariantAssembler<'a> {
    pub fn new(product: &'a Product, entries: &'a [ConfiguratorEntry], index: &'a OptionIndex) -> Self {
        let mut by_option = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_option.entry(entry.option_id()).or_insert(entry);
        }
        Self {
            product,
            index,
            entries: by_option,
        }
    }

    /// # Errors
    ///
    /// An invariant violation when base price plus surcharges overflows.
    ///
    /// # Panics
    ///
    /// On a combination that is empty, misses a group, references an option
    /// outside the configurator set, or picks two options of the same group.
    /// Each means the enumeration upstream is broken.
    pub fn assemble(&self, combination: &Combination) -> DomainResult<VariantRecord> {
        assert!(
            !combination.is_empty(),
            "empty combination for product {}",
            self.product.id_typed()
        );
        assert_eq!(
            combination.len(),
            self.index.group_count(),
            "combination for product {} does not pick one option per group",
            self.product.id_typed()
        );

        let variations: Vec<Variation> = combination
            .iter()
            .map(|&id| Variation { id })
            .collect();

        let mut chosen: Vec<(usize, &ConfiguratorEntry)> = combination
            .iter()
            .map(|option_id| self.resolve(option_id))
            .collect();
        // Stable: options of one group never meet here, ties would be a bug.
        chosen.sort_by_key(|(rank, _)| *rank);
        assert!(
            chosen.windows(2).all(|pair| pair[0].0 != pair[1].0),
            "combination for product {} picks two options of one group",
            self.product.id_typed()
        );

        let name = std::iter::once(self.product.name())
            .chain(chosen.iter().map(|(_, entry)| entry.option_name()))
            .collect::<Vec<_>>()
            .join(" ");

        let variation_ids = chosen.iter().map(|(_, entry)| entry.option_id()).collect();
        let price = aggregate_price(self.product.price(), chosen.iter().map(|(_, entry)| *entry))?;

        Ok(VariantRecord::new(
            self.product.id_typed(),
            name,
            variations,
            variation_ids,
            price,
        ))
    }

    fn resolve(&self, option_id: &OptionId) -> (usize, &'a ConfiguratorEntry) {
        match (self.index.group_rank(option_id), self.entries.get(option_id)) {
            (Some(rank), Some(entry)) => (rank, *entry),
            _ => panic!(
                "option {option_id} is not part of the configurator set of product {}",
                self.product.id_typed()
            ),
        }
    }
}
