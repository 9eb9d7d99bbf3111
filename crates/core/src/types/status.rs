//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order status as shown on the dashboard.
///
/// The storefront only displays orders; status transitions happen in a
/// backend that does not exist here, so this is a plain display enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order has reached the customer.
    ///
    /// Delivered orders expose the reorder affordance on the dashboard.
    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(OrderStatus::Delivered.to_string(), "Delivered");
        assert_eq!(OrderStatus::Processing.to_string(), "Processing");
    }

    #[test]
    fn test_is_delivered() {
        assert!(OrderStatus::Delivered.is_delivered());
        assert!(!OrderStatus::Shipped.is_delivered());
    }

    #[test]
    fn test_from_str_roundtrip() {
        let status: OrderStatus = "shipped".parse().unwrap();
        assert_eq!(status, OrderStatus::Shipped);
        assert!("paid".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
    }
}
