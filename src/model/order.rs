use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
///
/// Fixture data carries the numeric wire code (1..=5). Decoding an
/// out-of-range code at load time is a contract error; raw codes arriving
/// from a display seam go through [`OrderStatus::from_code`] instead, which
/// reports unrecognized values as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum OrderStatus {
    Processing = 1,
    NotAvailable = 2,
    Available = 3,
    Cancelled = 4,
    Shipped = 5,
}

impl OrderStatus {
    /// Every recognized status, in wire-code order. Filter vocabularies are
    /// derived from this list rather than maintained separately.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Processing,
        OrderStatus::NotAvailable,
        OrderStatus::Available,
        OrderStatus::Cancelled,
        OrderStatus::Shipped,
    ];

    /// Decodes a raw status code. Unrecognized codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// The numeric wire code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unrecognized order status code: {code}"))
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

/// A transfer order between stores.
///
/// `order_number` is the unique identity key. `item_number` is a best-effort
/// reference to a [`Product`](crate::model::Product): an order may point at a
/// retired item, and callers resolve the join through an explicit `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: String,
    pub customer_name: String,
    pub created_by_name: String,
    pub item_number: String,
    pub size: String,
    pub store_from_id: String,
    pub store_to_id: String,
    pub order_status: OrderStatus,
    pub create_date: DateTime<Utc>,
    #[serde(default)]
    pub is_internet_order: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_by_name: Option<String>,
}

/// Dashboard aggregate across the full order and product catalogs.
///
/// Cancelled and shipped orders count toward `total_orders` but have no
/// dedicated counter, so the three status counters sum to at most the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_orders: usize,
    pub processing_orders: usize,
    pub available_orders: usize,
    pub not_available_orders: usize,
    pub total_products: usize,
    pub total_inventory: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unrecognized_code_is_none() {
        assert_eq!(OrderStatus::from_code(0), None);
        assert_eq!(OrderStatus::from_code(6), None);
        assert_eq!(OrderStatus::from_code(255), None);
    }

    #[test]
    fn status_deserializes_from_wire_code() {
        let status: OrderStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, OrderStatus::Available);

        let err = serde_json::from_str::<OrderStatus>("9");
        assert!(err.is_err());
    }
}
