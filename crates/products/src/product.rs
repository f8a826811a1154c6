use serde::{Deserialize, Serialize};

use variantgen_core::{DomainError, DomainResult, Entity, ProductId};

use crate::price::Price;

/// Catalog product as loaded from the product store.
///
/// Read-only from the generator's point of view: it is the parent every
/// variant derives its name and base price from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { id, name, price })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Price {
        &self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_keeps_name_and_price() {
        let id = ProductId::new();
        let product = Product::new(id, "Shirt", Price::new(2000, 1681)).unwrap();

        assert_eq!(product.id(), &id);
        assert_eq!(product.id_typed(), id);
        assert_eq!(product.name(), "Shirt");
        assert_eq!(product.price(), &Price::new(2000, 1681));
    }

    #[test]
    fn new_product_rejects_blank_name() {
        let err = Product::new(ProductId::new(), "   ", Price::ZERO).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }
}
