//! Stable grouping of configurator options by option group.

use std::collections::HashMap;

use variantgen_core::{OptionGroupId, OptionId};

use crate::configurator::ConfiguratorEntry;

/// Options of one group, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroupBucket {
    group_id: OptionGroupId,
    options: Vec<OptionId>,
}

impl OptionGroupBucket {
    pub fn group_id(&self) -> OptionGroupId {
        self.group_id
    }

    pub fn options(&self) -> &[OptionId] {
        &self.options
    }
}

impl AsRef<[OptionId]> for OptionGroupBucket {
    fn as_ref(&self) -> &[OptionId] {
        &self.options
    }
}

/// Groups in first-seen order plus an option -> group rank lookup.
///
/// The rank of a group is its position in `groups()`. It is the single
/// ordering key for both enumeration and variant naming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionIndex {
    groups: Vec<OptionGroupBucket>,
    rank_of: HashMap<OptionId, usize>,
}

impl OptionIndex {
    /// Bucket entries by group without sorting anything.
    ///
    /// A repeated option id keeps its first occurrence only.
    pub fn build(entries: &[ConfiguratorEntry]) -> Self {
        let mut groups: Vec<OptionGroupBucket> = Vec::new();
        let mut group_rank: HashMap<OptionGroupId, usize> = HashMap::new();
        let mut rank_of: HashMap<OptionId, usize> = HashMap::new();

        for entry in entries {
            let option_id = entry.option_id();
            if rank_of.contains_key(&option_id) {
                continue;
            }

            let group_id = entry.group_id();
            let rank = *group_rank.entry(group_id).or_insert_with(|| {
                groups.push(OptionGroupBucket {
                    group_id,
                    options: Vec::new(),
                });
                groups.len() - 1
            });

            groups[rank].options.push(option_id);
            rank_of.insert(option_id, rank);
        }

        Self { groups, rank_of }
    }

    pub fn groups(&self) -> &[OptionGroupBucket] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// First-seen position of the group owning `option_id`.
    pub fn group_rank(&self, option_id: &OptionId) -> Option<usize> {
        self.rank_of.get(option_id).copied()
    }

    /// Number of full combinations, saturating at `usize::MAX`.
    pub fn combination_count(&self) -> usize {
        super::combination::count_combinations(&self.groups)
    }
}
