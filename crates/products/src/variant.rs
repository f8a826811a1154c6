//! Generated variant records handed to the batch writer.

use serde::{Deserialize, Serialize};

use variantgen_core::{OptionId, ProductId};

use crate::price::Price;

/// One `{id}` element of a variant's `variations` mapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variation {
    pub id: OptionId,
}

/// A derived product record, one per option combination.
///
/// `price` is the only optional field. It is absent (and skipped when
/// serialized) when none of the chosen options carries a surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    parent_id: ProductId,
    name: String,
    variations: Vec<Variation>,
    variation_ids: Vec<OptionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<Price>,
}

impl VariantRecord {
    pub(crate) fn new(
        parent_id: ProductId,
        name: String,
        variations: Vec<Variation>,
        variation_ids: Vec<OptionId>,
        price: Option<Price>,
    ) -> Self {
        assert!(
            !variations.is_empty() && !variation_ids.is_empty(),
            "variant of product {parent_id} has no options"
        );
        Self {
            parent_id,
            name,
            variations,
            variation_ids,
            price,
        }
    }

    pub fn parent_id(&self) -> ProductId {
        self.parent_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chosen options in combination (enumeration) order.
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// Chosen options in group order.
    pub fn variation_ids(&self) -> &[OptionId] {
        &self.variation_ids
    }

    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_camel_case_plain_fields() {
        let parent = ProductId::new();
        let red = OptionId::new();
        let small = OptionId::new();
        let record = VariantRecord::new(
            parent,
            "Shirt Red S".to_string(),
            vec![Variation { id: red }, Variation { id: small }],
            vec![red, small],
            Some(Price::new(2200, 1849)),
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "parentId": parent.to_string(),
                "name": "Shirt Red S",
                "variations": [{ "id": red.to_string() }, { "id": small.to_string() }],
                "variationIds": [red.to_string(), small.to_string()],
                "price": { "gross": 2200, "net": 1849 },
            })
        );
    }

    #[test]
    fn absent_price_is_not_serialized() {
        let blue = OptionId::new();
        let record = VariantRecord::new(
            ProductId::new(),
            "Shirt Blue".to_string(),
            vec![Variation { id: blue }],
            vec![blue],
            None,
        );

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("price").is_none());
        assert_eq!(record.price(), None);
    }

    #[test]
    #[should_panic(expected = "has no options")]
    fn empty_variations_abort() {
        VariantRecord::new(ProductId::new(), "Shirt".to_string(), vec![], vec![], None);
    }
}
