//! Order commands carried from the boundary into the service.

use super::{Address, DiscountCode, OrderItem, OrderStatus};

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    /// The line items, already validated by the boundary.
    pub items: Vec<OrderItem>,

    /// The shipping address.
    pub shipping_address: Address,

    /// Optional discount code.
    pub discount_code: Option<DiscountCode>,
}

impl PlaceOrder {
    /// Creates a new PlaceOrder command.
    pub fn new(
        items: Vec<OrderItem>,
        shipping_address: Address,
        discount_code: Option<DiscountCode>,
    ) -> Self {
        Self {
            items,
            shipping_address,
            discount_code,
        }
    }
}

/// Command to update an existing order. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    /// Target status; Completed goes through the guarded transition.
    pub status: Option<OrderStatus>,

    /// Replacement shipping address.
    pub shipping_address: Option<Address>,

    /// Replacement discount code.
    pub discount_code: Option<DiscountCode>,
}

impl UpdateOrder {
    /// Creates an empty update command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement shipping address.
    pub fn shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }

    /// Sets the replacement discount code.
    pub fn discount_code(mut self, code: DiscountCode) -> Self {
        self.discount_code = Some(code);
        self
    }
}
