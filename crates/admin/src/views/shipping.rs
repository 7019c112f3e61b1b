//! Shipping page view.

use stockroom_core::{MISSING_DATE, Shipment, format_date};

use super::orders::status_filter;
use super::{Badge, non_empty};
use crate::components::{SelectFilter, distinct_values};

/// Shipping status and courier filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingFilter {
    pub status: Option<String>,
    pub courier: Option<String>,
}

impl ShippingFilter {
    #[must_use]
    pub fn from_query(status: Option<&str>, courier: Option<&str>) -> Self {
        Self {
            status: non_empty(status).map(str::to_string),
            courier: non_empty(courier).map(str::to_string),
        }
    }

    #[must_use]
    pub fn matches(&self, shipment: &Shipment) -> bool {
        let status_ok = self
            .status
            .as_deref()
            .is_none_or(|s| shipment.status.as_deref() == Some(s));
        let courier_ok = self
            .courier
            .as_deref()
            .is_none_or(|c| shipment.courier.as_deref() == Some(c));
        status_ok && courier_ok
    }
}

/// Courier dropdown built from the loaded shipments.
#[must_use]
pub fn courier_filter(shipments: &[Shipment], current: Option<&str>) -> SelectFilter {
    SelectFilter::new("courier", "Courier", "All Couriers")
        .values(distinct_values(shipments.iter().map(|s| s.courier.as_deref())))
        .select(current)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentRow {
    pub tracking_number: String,
    pub order_id: String,
    pub customer_name: String,
    pub courier: String,
    pub status: Badge,
    pub shipping_date: String,
}

impl From<&Shipment> for ShipmentRow {
    fn from(shipment: &Shipment) -> Self {
        let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING_DATE.to_string());
        Self {
            tracking_number: or_na(&shipment.tracking_number),
            order_id: shipment.order_id.clone(),
            customer_name: shipment.customer_name.clone(),
            courier: or_na(&shipment.courier),
            status: Badge::status(shipment.status.as_deref()),
            shipping_date: format_date(shipment.shipping_date.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingView {
    pub status: SelectFilter,
    pub courier: SelectFilter,
    pub shipments: Vec<ShipmentRow>,
    pub loaded: bool,
}

impl ShippingView {
    #[must_use]
    pub fn build(shipments: Option<&[Shipment]>, filter: &ShippingFilter) -> Self {
        let all = shipments.unwrap_or_default();
        Self {
            status: status_filter(filter.status.as_deref()),
            courier: courier_filter(all, filter.courier.as_deref()),
            shipments: all
                .iter()
                .filter(|s| filter.matches(s))
                .map(ShipmentRow::from)
                .collect(),
            loaded: shipments.is_some(),
        }
    }

    #[must_use]
    pub fn filters(&self) -> Vec<&SelectFilter> {
        vec![&self.status, &self.courier]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(order_id: &str, status: &str, courier: Option<&str>) -> Shipment {
        Shipment {
            order_id: order_id.to_string(),
            status: Some(status.to_string()),
            courier: courier.map(str::to_string),
            ..Shipment::default()
        }
    }

    #[test]
    fn test_status_and_courier_combine() {
        let shipments = vec![
            shipment("O1", "In Transit", Some("Aramex")),
            shipment("O2", "In Transit", Some("DHL")),
            shipment("O3", "Delivered", Some("Aramex")),
            shipment("O4", "In Transit", None),
        ];

        let filter = ShippingFilter::from_query(Some("In Transit"), Some("Aramex"));
        let view = ShippingView::build(Some(shipments.as_slice()), &filter);
        let ids: Vec<_> = view.shipments.iter().map(|s| s.order_id.as_str()).collect();
        assert_eq!(ids, ["O1"]);

        let couriers: Vec<_> = view.courier.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(couriers, ["All Couriers", "Aramex", "DHL"]);
    }

    #[test]
    fn test_missing_tracking_and_courier_show_na() {
        let row = ShipmentRow::from(&shipment("O4", "Pending", None));
        assert_eq!(row.tracking_number, "N/A");
        assert_eq!(row.courier, "N/A");
        assert_eq!(row.shipping_date, "N/A");
        assert_eq!(row.status.class, "status-pending");
    }
}
