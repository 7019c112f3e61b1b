//! Orders page view and order detail panel.

use stockroom_core::{KNOWN_ORDER_STATUSES, Order, format_date, format_money};

use super::{Badge, OrderRow, non_empty};
use crate::components::SelectFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<String>,
}

impl OrderFilter {
    #[must_use]
    pub fn from_query(status: Option<&str>) -> Self {
        Self {
            status: non_empty(status).map(str::to_string),
        }
    }

    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        self.status
            .as_deref()
            .is_none_or(|s| order.status.as_deref() == Some(s))
    }
}

/// Status dropdown shared by the orders and shipping pages.
#[must_use]
pub fn status_filter(current: Option<&str>) -> SelectFilter {
    SelectFilter::new("status", "Status", "All Statuses")
        .values(KNOWN_ORDER_STATUSES)
        .select(current)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersView {
    pub status: SelectFilter,
    pub orders: Vec<OrderRow>,
    pub loaded: bool,
}

impl OrdersView {
    #[must_use]
    pub fn build(orders: Option<&[Order]>, filter: &OrderFilter) -> Self {
        Self {
            status: status_filter(filter.status.as_deref()),
            orders: orders
                .unwrap_or_default()
                .iter()
                .filter(|o| filter.matches(o))
                .map(OrderRow::from)
                .collect(),
            loaded: orders.is_some(),
        }
    }

    #[must_use]
    pub fn filters(&self) -> Vec<&SelectFilter> {
        vec![&self.status]
    }
}

/// Contents of the order detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub id: String,
    pub status: Badge,
    pub customer_name: String,
    pub phone: String,
    pub order_date: String,
    pub items: String,
    pub address: String,
    pub total: String,
}

impl OrderDetailView {
    /// Look an order up by ID among the loaded orders.
    #[must_use]
    pub fn find(orders: &[Order], id: &str) -> Option<Self> {
        orders.iter().find(|o| o.id == id).map(Self::from)
    }
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        let or = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        Self {
            id: order.id.clone(),
            status: Badge::status(order.status.as_deref()),
            customer_name: order.customer_name.clone(),
            phone: or(&order.phone, "No phone"),
            order_date: format_date(order.order_date.as_deref()),
            items: or(&order.items, "No items specified"),
            address: or(&order.address, "No address"),
            total: format_money(order.total()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order(id: &str, status: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            status: status.map(str::to_string),
            ..Order::default()
        }
    }

    #[test]
    fn test_status_filter_is_exact() {
        let orders = vec![
            order("A", Some("Pending")),
            order("B", Some("Delivered")),
            order("C", None),
            order("D", Some("pending")),
        ];

        let view = OrdersView::build(Some(orders.as_slice()), &OrderFilter::from_query(Some("Pending")));
        let ids: Vec<_> = view.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["A"]);

        let view = OrdersView::build(Some(orders.as_slice()), &OrderFilter::from_query(Some("")));
        assert_eq!(view.orders.len(), 4);
    }

    #[test]
    fn test_status_options() {
        let filter = status_filter(Some("In Transit"));
        let values: Vec<_> = filter.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["", "Pending", "Shipping", "In Transit", "Delivered"]);
        assert!(filter.options[3].selected);
    }

    #[test]
    fn test_detail_fallbacks() {
        let orders = vec![Order {
            id: "ORD-7".to_string(),
            customer_name: "Omar".to_string(),
            subtotal: Some("19.999".parse().unwrap()),
            ..Order::default()
        }];

        let detail = OrderDetailView::find(&orders, "ORD-7").unwrap();
        assert_eq!(detail.phone, "No phone");
        assert_eq!(detail.items, "No items specified");
        assert_eq!(detail.address, "No address");
        assert_eq!(detail.order_date, "N/A");
        assert_eq!(detail.total, "$20.00");
        assert_eq!(detail.status.class, "status-pending");

        assert!(OrderDetailView::find(&orders, "ORD-8").is_none());
    }

    #[test]
    fn test_empty_result_is_loaded() {
        let view = OrdersView::build(Some(&[][..]), &OrderFilter::default());
        assert!(view.loaded);
        assert!(view.orders.is_empty());
    }
}
