use serde::{Deserialize, Serialize};

use variantgen_core::{DomainError, DomainResult, ValueObject};

/// Monetary amount with gross and net components.
///
/// Amounts are in the smallest currency unit (e.g. cents). Signed, so a
/// surcharge may also be a discount.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub gross: i64,
    pub net: i64,
}

impl Price {
    pub const ZERO: Price = Price { gross: 0, net: 0 };

    pub fn new(gross: i64, net: i64) -> Self {
        Self { gross, net }
    }

    pub fn is_zero(&self) -> bool {
        self.gross == 0 && self.net == 0
    }

    /// Component-wise sum; fails instead of wrapping when either side overflows.
    pub fn checked_add(self, rhs: Price) -> DomainResult<Price> {
        let gross = self
            .gross
            .checked_add(rhs.gross)
            .ok_or_else(|| DomainError::invariant("gross price overflow"))?;
        let net = self
            .net
            .checked_add(rhs.net)
            .ok_or_else(|| DomainError::invariant("net price overflow"))?;
        Ok(Price { gross, net })
    }
}

impl ValueObject for Price {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_produces_new_value_and_leaves_operands_untouched() {
        let base = Price::new(2000, 1681);
        let surcharge = Price::new(200, 168);

        let total = base.checked_add(surcharge).unwrap();

        assert_eq!(total, Price::new(2200, 1849));
        assert_eq!(base, Price::new(2000, 1681));
    }

    #[test]
    fn negative_surcharge_acts_as_discount() {
        let price = Price::new(1000, 840)
            .checked_add(Price::new(-250, -210))
            .unwrap();
        assert_eq!(price, Price::new(750, 630));
    }

    #[test]
    fn overflow_is_reported_instead_of_wrapping() {
        let err = Price::new(i64::MAX - 100, 0)
            .checked_add(Price::new(200, 0))
            .unwrap_err();
        assert_eq!(err, DomainError::invariant("gross price overflow"));

        let err = Price::new(0, i64::MIN)
            .checked_add(Price::new(0, -1))
            .unwrap_err();
        assert_eq!(err, DomainError::invariant("net price overflow"));
    }

    #[test]
    fn zero_detection_requires_both_components() {
        assert!(Price::ZERO.is_zero());
        assert!(Price::default().is_zero());
        assert!(!Price::new(0, 1).is_zero());
        assert!(!Price::new(1, 0).is_zero());
    }
}
