//! Order status state machine.

/// The status of an order in its lifecycle.
///
/// Single transition:
/// ```text
/// Created ──► Completed
/// ```
/// Orders always start Created; no edge leaves Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    /// Order has been placed and can still be completed.
    #[default]
    Created,

    /// Order has been completed (terminal).
    Completed,
}

impl OrderStatus {
    /// Returns true if the order can be completed from this status.
    pub fn can_complete(&self) -> bool {
        matches!(self, OrderStatus::Created)
    }

    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Completed => "COMPLETED",
        }
    }

    /// Parses the wire representation back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CREATED" => Some(OrderStatus::Created),
            "COMPLETED" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
    }

    #[test]
    fn only_created_can_complete() {
        assert!(OrderStatus::Created.can_complete());
        assert!(!OrderStatus::Completed.can_complete());
    }

    #[test]
    fn wire_roundtrip() {
        assert_eq!(OrderStatus::parse("CREATED"), Some(OrderStatus::Created));
        assert_eq!(OrderStatus::parse("COMPLETED"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse("SHIPPED"), None);
        assert_eq!(OrderStatus::Created.as_str(), "CREATED");
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(OrderStatus::Completed.to_string(), "COMPLETED");
    }
}
