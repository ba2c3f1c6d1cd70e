//! Value objects for the order domain.
//!
//! Each type exposes a validating factory and pure operations; invalid states
//! are unrepresentable once constructed.

use common::OrderId;
use order_store::OrderItemRecord;

use crate::error::ValidationError;

/// A non-negative numeric value.
///
/// Zero is allowed (free or zero-cost items); negative values are rejected at
/// construction. `add` and `multiply` are closed over non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PositiveNumber(f64);

impl PositiveNumber {
    /// Creates a new value, rejecting negatives.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value < 0.0 || value.is_nan() {
            return Err(ValidationError::NegativeValue);
        }
        Ok(Self(value))
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Adds another value. Closed over non-negative values.
    pub fn add(&self, other: PositiveNumber) -> PositiveNumber {
        Self(self.0 + other.0)
    }

    /// Multiplies by another value. Closed over non-negative values.
    pub fn multiply(&self, other: PositiveNumber) -> PositiveNumber {
        Self(self.0 * other.0)
    }
}

impl std::fmt::Display for PositiveNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A free-text shipping address, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    /// Creates a new address, trimming whitespace and rejecting empty input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discount code attached to an order.
///
/// `Discount20` is the only recognized code and grants a flat 20% reduction
/// on the computed total. Any other non-empty code is accepted and stored but
/// has no computational effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountCode {
    /// The literal "DISCOUNT20".
    Discount20,
    /// A code that is stored but inert.
    Unrecognized(String),
}

impl DiscountCode {
    /// Parses a raw code. Empty or whitespace-only input yields no code.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else if value == "DISCOUNT20" {
            Some(DiscountCode::Discount20)
        } else {
            Some(DiscountCode::Unrecognized(value.to_string()))
        }
    }

    /// Returns the code as stored and displayed.
    pub fn as_str(&self) -> &str {
        match self {
            DiscountCode::Discount20 => "DISCOUNT20",
            DiscountCode::Unrecognized(code) => code,
        }
    }

    /// Returns true if the code affects the total.
    pub fn is_recognized(&self) -> bool {
        matches!(self, DiscountCode::Discount20)
    }

    /// Returns the factor applied to the order total.
    pub fn multiplier(&self) -> PositiveNumber {
        match self {
            DiscountCode::Discount20 => PositiveNumber(0.8),
            DiscountCode::Unrecognized(_) => PositiveNumber(1.0),
        }
    }
}

impl std::fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line item in an order.
///
/// All three fields are validated by the caller; the item itself adds no
/// further validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// The product identifier.
    pub product_id: OrderId,

    /// Quantity ordered.
    pub quantity: PositiveNumber,

    /// Price per unit.
    pub price: PositiveNumber,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(product_id: OrderId, quantity: PositiveNumber, price: PositiveNumber) -> Self {
        Self {
            product_id,
            quantity,
            price,
        }
    }

    /// Returns price × quantity. Never fails, both operands are non-negative.
    pub fn subtotal(&self) -> PositiveNumber {
        self.price.multiply(self.quantity)
    }

    /// Converts to the persisted shape with raw primitive fields.
    pub fn to_record(&self) -> OrderItemRecord {
        OrderItemRecord {
            product_id: self.product_id.to_string(),
            quantity: self.quantity.value(),
            price: self.price.value(),
        }
    }

    /// Rebuilds an item from a persisted record, re-running value-object
    /// construction invariants.
    pub fn from_record(record: &OrderItemRecord) -> Result<Self, ValidationError> {
        Ok(Self {
            product_id: OrderId::from_string(record.product_id.clone()),
            quantity: PositiveNumber::new(record.quantity)?,
            price: PositiveNumber::new(record.price)?,
        })
    }
}
