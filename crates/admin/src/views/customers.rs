//! Customers page view.
//!
//! Order statistics are joined at render time against whatever orders
//! collection was last loaded; the customers endpoint does not carry them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use stockroom_core::{Customer, Order, format_date, format_money};

/// Per-customer order statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerStats<'a> {
    pub order_count: usize,
    pub total_spent: Decimal,
    /// Most recent order, by parsed order date.
    pub last_order: Option<&'a Order>,
}

impl<'a> CustomerStats<'a> {
    #[must_use]
    pub fn derive(customer_id: &str, orders: &'a [Order]) -> Self {
        let mut stats = Self::default();
        for order in orders.iter().filter(|o| o.belongs_to(customer_id)) {
            stats.order_count += 1;
            stats.total_spent += order.total();
            let newer = stats
                .last_order
                .is_none_or(|last| order.placed_at() > last.placed_at());
            if newer {
                stats.last_order = Some(order);
            }
        }
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub order_count: usize,
    pub total_spent: String,
    /// Formatted date of the latest order, or "No orders".
    pub last_order: String,
}

impl CustomerRow {
    #[must_use]
    pub fn build(customer: &Customer, orders: &[Order]) -> Self {
        let stats = CustomerStats::derive(&customer.id, orders);
        Self {
            name: customer.name.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            address: customer.address.clone().unwrap_or_default(),
            order_count: stats.order_count,
            total_spent: format_money(stats.total_spent),
            last_order: stats.last_order.map_or_else(
                || "No orders".to_string(),
                |o| format_date(o.order_date.as_deref()),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomersView {
    pub customers: Vec<CustomerRow>,
    pub loaded: bool,
    /// When the joined orders were fetched; `None` if never loaded.
    pub orders_as_of: Option<String>,
}

impl CustomersView {
    #[must_use]
    pub fn build(
        customers: Option<&[Customer]>,
        orders: Option<(&[Order], DateTime<Utc>)>,
    ) -> Self {
        let (order_rows, orders_as_of) = orders.map_or((&[][..], None), |(rows, fetched_at)| {
            (
                rows,
                Some(fetched_at.format("%b %-d, %Y %H:%M UTC").to_string()),
            )
        });
        Self {
            customers: customers
                .unwrap_or_default()
                .iter()
                .map(|c| CustomerRow::build(c, order_rows))
                .collect(),
            loaded: customers.is_some(),
            orders_as_of,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            ..Customer::default()
        }
    }

    fn order(customer_id: &str, date: &str, subtotal: &str, discounted: Option<&str>) -> Order {
        Order {
            customer_id: Some(customer_id.to_string()),
            order_date: Some(date.to_string()),
            subtotal: Some(subtotal.parse().unwrap()),
            total_after_discount: discounted.map(|d| d.parse().unwrap()),
            ..Order::default()
        }
    }

    #[test]
    fn test_spend_prefers_discounted_total() {
        let orders = vec![
            order("C1", "2024-01-05", "100", Some("90")),
            order("C1", "2024-03-10", "40", None),
            order("C2", "2024-02-01", "999", None),
        ];

        let row = CustomerRow::build(&customer("C1", "Aisha"), &orders);
        assert_eq!(row.order_count, 2);
        assert_eq!(row.total_spent, "$130.00");
        assert_eq!(row.last_order, "Mar 10, 2024");
    }

    #[test]
    fn test_customer_without_orders() {
        let orders = vec![order("C2", "2024-02-01", "10", None)];
        let row = CustomerRow::build(&customer("C1", "Aisha"), &orders);
        assert_eq!(row.order_count, 0);
        assert_eq!(row.total_spent, "$0.00");
        assert_eq!(row.last_order, "No orders");
    }

    #[test]
    fn test_last_order_uses_parsed_dates() {
        let orders = vec![
            order("C1", "2024-12-01", "1", None),
            order("C1", "2024-02-15T10:00:00Z", "1", None),
            order("C1", "not a date", "1", None),
        ];
        let stats = CustomerStats::derive("C1", &orders);
        assert_eq!(
            stats.last_order.unwrap().order_date.as_deref(),
            Some("2024-12-01")
        );
    }

    #[test]
    fn test_view_reports_orders_snapshot() {
        let customers = vec![customer("C1", "Aisha")];
        let fetched_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let view = CustomersView::build(Some(customers.as_slice()), Some((&[][..], fetched_at)));
        assert_eq!(view.orders_as_of.as_deref(), Some("May 1, 2024 09:30 UTC"));
        assert_eq!(view.customers[0].last_order, "No orders");

        let view = CustomersView::build(Some(customers.as_slice()), None);
        assert!(view.orders_as_of.is_none());
        assert!(view.loaded);
    }
}
