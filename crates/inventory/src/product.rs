use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity};

/// Product identifier: opaque, caller-supplied text.
///
/// Compared by exact equality; no normalization (case, whitespace) is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One inventory item.
///
/// `quantity >= 0` and `price >= 0` hold for the whole lifetime of the value:
/// the constructor and both setters reject anything else and keep the prior
/// state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Only the store creates products; see `Inventory::add`.
    pub(crate) fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> DomainResult<Self> {
        check_quantity(quantity)?;
        check_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            quantity,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        check_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn check_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid_value("quantity", quantity));
    }
    Ok(())
}

fn check_price(price: f64) -> DomainResult<()> {
    if price.is_nan() || price < 0.0 {
        return Err(DomainError::invalid_value("price", price));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Quantity: {} | Price: ${:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}
