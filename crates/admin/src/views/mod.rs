//! View models: pure functions from cached payloads plus request filters
//! to the display values the templates paint.

pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod shipping;

use stockroom_core::{Order, format_date, format_money, status_class};

/// A status label with its badge class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

impl Badge {
    /// Badge for an order or shipment status cell.
    #[must_use]
    pub fn status(status: Option<&str>) -> Self {
        Self {
            label: status.unwrap_or_default().to_string(),
            class: status_class(status),
        }
    }
}

/// One row of an orders table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub date: String,
    pub total: String,
    pub status: Badge,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            date: format_date(order.order_date.as_deref()),
            total: format_money(order.total()),
            status: Badge::status(order.status.as_deref()),
        }
    }
}

/// Treat an empty query value as "no filter".
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
