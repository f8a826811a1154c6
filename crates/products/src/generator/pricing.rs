use variantgen_core::DomainResult;

use crate::configurator::ConfiguratorEntry;
use crate::price::Price;

/// Base price plus every effective surcharge, added in the given entry order.
///
/// Returns `Ok(None)` when no entry carries a non-zero surcharge: the variant
/// then gets no price of its own rather than a copy of the base price. Fails
/// with an invariant violation when the sum leaves the `i64` range.
pub fn aggregate_price<'a, I>(base: &Price, entries: I) -> DomainResult<Option<Price>>
where
    I: IntoIterator<Item = &'a ConfiguratorEntry>,
{
    let mut surcharges = entries
        .into_iter()
        .filter_map(ConfiguratorEntry::effective_surcharge)
        .peekable();

    if surcharges.peek().is_none() {
        return Ok(None);
    }
    surcharges
        .try_fold(*base, Price::checked_add)
        .map(Some)
}
