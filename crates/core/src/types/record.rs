//! Spreadsheet records.
//!
//! Field names follow the sheet column headers. The backing spreadsheet
//! owns the real schema, so every record decodes leniently: missing or
//! malformed cells become `None` (or an empty string for identifying
//! columns) instead of failing the whole payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cell;
use super::date::parse_date;
use super::status::StockStatus;

/// A customer order row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "Order ID", default, deserialize_with = "cell::string")]
    pub id: String,
    #[serde(rename = "Customer ID", default, deserialize_with = "cell::opt_string")]
    pub customer_id: Option<String>,
    #[serde(rename = "Customer Name", default, deserialize_with = "cell::string")]
    pub customer_name: String,
    #[serde(rename = "Order Date", default, deserialize_with = "cell::opt_string")]
    pub order_date: Option<String>,
    #[serde(rename = "Subtotal", default, deserialize_with = "cell::opt_decimal")]
    pub subtotal: Option<Decimal>,
    #[serde(
        rename = "Total After Discount",
        default,
        deserialize_with = "cell::opt_decimal"
    )]
    pub total_after_discount: Option<Decimal>,
    #[serde(rename = "Status", default, deserialize_with = "cell::opt_string")]
    pub status: Option<String>,
    #[serde(
        rename = "Items (Product × Qty)",
        default,
        deserialize_with = "cell::opt_string"
    )]
    pub items: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "cell::opt_string")]
    pub address: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "cell::opt_string")]
    pub phone: Option<String>,
}

impl Order {
    /// Amount charged: the discounted total when present, else the
    /// subtotal, else zero.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total_after_discount
            .or(self.subtotal)
            .unwrap_or_default()
    }

    /// Whether this order belongs to the given customer.
    ///
    /// Blank customer IDs never match, so unattributed orders are not
    /// credited to customers that are also missing an ID.
    #[must_use]
    pub fn belongs_to(&self, customer_id: &str) -> bool {
        !customer_id.is_empty() && self.customer_id.as_deref() == Some(customer_id)
    }

    /// Parsed order date, if the cell holds a recognisable date.
    #[must_use]
    pub fn placed_at(&self) -> Option<chrono::NaiveDateTime> {
        self.order_date.as_deref().and_then(parse_date)
    }
}

/// An inventory (product) row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product ID", default, deserialize_with = "cell::string")]
    pub id: String,
    #[serde(rename = "Product Name", default, deserialize_with = "cell::string")]
    pub name: String,
    #[serde(rename = "Category", default, deserialize_with = "cell::opt_string")]
    pub category: Option<String>,
    #[serde(rename = "Subcategory", default, deserialize_with = "cell::opt_string")]
    pub subcategory: Option<String>,
    #[serde(rename = "Unit Price", default, deserialize_with = "cell::opt_decimal")]
    pub unit_price: Option<Decimal>,
    #[serde(
        rename = "Quantity in Stock",
        default,
        deserialize_with = "cell::opt_int"
    )]
    pub quantity: Option<i64>,
    #[serde(rename = "Total Value", default, deserialize_with = "cell::opt_decimal")]
    pub total_value: Option<Decimal>,
}

impl Product {
    /// Stock bucket, or `None` when the quantity cell is blank or negative.
    #[must_use]
    pub fn stock_status(&self) -> Option<StockStatus> {
        self.quantity.and_then(StockStatus::from_quantity)
    }

    /// Inventory value: the sheet's `Total Value` column, or price times
    /// quantity when the sheet leaves it blank.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.total_value.unwrap_or_else(|| {
            self.unit_price.unwrap_or_default() * Decimal::from(self.quantity.unwrap_or_default())
        })
    }
}

/// A shipment row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "Tracking Number", default, deserialize_with = "cell::opt_string")]
    pub tracking_number: Option<String>,
    #[serde(rename = "Order ID", default, deserialize_with = "cell::string")]
    pub order_id: String,
    #[serde(rename = "Customer Name", default, deserialize_with = "cell::string")]
    pub customer_name: String,
    #[serde(rename = "Courier", default, deserialize_with = "cell::opt_string")]
    pub courier: Option<String>,
    #[serde(rename = "Shipping Status", default, deserialize_with = "cell::opt_string")]
    pub status: Option<String>,
    #[serde(rename = "Shipping Date", default, deserialize_with = "cell::opt_string")]
    pub shipping_date: Option<String>,
}

/// A customer row.
///
/// Order statistics are not stored on the sheet; see
/// `CustomerStats` in the dashboard crate for the join against orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "Customer ID", default, deserialize_with = "cell::string")]
    pub id: String,
    #[serde(rename = "Customer Name", default, deserialize_with = "cell::string")]
    pub name: String,
    #[serde(rename = "Phone", default, deserialize_with = "cell::opt_string")]
    pub phone: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "cell::opt_string")]
    pub address: Option<String>,
}

/// Headline numbers for the dashboard page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    #[serde(default, deserialize_with = "cell::decimal")]
    pub total_sales: Decimal,
    #[serde(default, deserialize_with = "cell::int")]
    pub total_orders: i64,
    #[serde(default, deserialize_with = "cell::int")]
    pub pending_orders: i64,
    #[serde(default, deserialize_with = "cell::int")]
    pub low_stock_items: i64,
}

/// Payload of the `dashboard` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub kpis: Kpis,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}

/// Values submitted by the add-product form, in the parameter names the
/// `inventory`/`create` action expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub unit_price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub sku: String,
}

impl NewProduct {
    /// Query parameters for the `create` action, in form order.
    #[must_use]
    pub fn params(&self) -> [(&'static str, &str); 6] {
        [
            ("productName", self.product_name.as_str()),
            ("category", self.category.as_str()),
            ("subcategory", self.subcategory.as_str()),
            ("unitPrice", self.unit_price.as_str()),
            ("quantity", self.quantity.as_str()),
            ("sku", self.sku.as_str()),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_order_decodes_sheet_columns() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "Order ID": "ORD-001",
            "Customer ID": 17,
            "Customer Name": "Layla Hassan",
            "Order Date": "2024-03-01T00:00:00.000Z",
            "Subtotal": 120,
            "Total After Discount": "108.00",
            "Status": "Pending",
            "Items (Product × Qty)": "Hammer × 2",
            "Address": "12 Palm St",
            "Phone": "",
            "Internal Note": "ignored"
        }))
        .unwrap();

        assert_eq!(order.id, "ORD-001");
        assert_eq!(order.customer_id.as_deref(), Some("17"));
        assert_eq!(order.total(), dec("108.00"));
        assert_eq!(order.items.as_deref(), Some("Hammer × 2"));
        assert_eq!(order.phone, None);
    }

    #[test]
    fn test_order_total_falls_back() {
        let mut order = Order {
            subtotal: Some(dec("50")),
            ..Order::default()
        };
        assert_eq!(order.total(), dec("50"));

        order.total_after_discount = Some(dec("45"));
        assert_eq!(order.total(), dec("45"));

        order.total_after_discount = None;
        order.subtotal = None;
        assert_eq!(order.total(), Decimal::ZERO);
    }

    #[test]
    fn test_blank_customer_id_never_matches() {
        let order = Order::default();
        assert!(!order.belongs_to(""));

        let order = Order {
            customer_id: Some("C1".to_string()),
            ..Order::default()
        };
        assert!(order.belongs_to("C1"));
        assert!(!order.belongs_to("C2"));
    }

    #[test]
    fn test_product_value_is_computed_when_blank() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "Product ID": "P-1",
            "Unit Price": "2.50",
            "Quantity in Stock": 4
        }))
        .unwrap();
        assert_eq!(product.value(), dec("10.00"));
        assert_eq!(product.stock_status(), Some(StockStatus::LowStock));

        let blank: Product = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(blank.stock_status(), None);

        let oversold = Product {
            quantity: Some(-2),
            ..Product::default()
        };
        assert_eq!(oversold.stock_status(), None);
    }

    #[test]
    fn test_dashboard_snapshot_tolerates_missing_sections() {
        let snapshot: DashboardSnapshot = serde_json::from_value(serde_json::json!({
            "kpis": { "totalSales": 15234.5, "totalOrders": "87" }
        }))
        .unwrap();
        assert_eq!(snapshot.kpis.total_sales, dec("15234.5"));
        assert_eq!(snapshot.kpis.total_orders, 87);
        assert_eq!(snapshot.kpis.pending_orders, 0);
        assert!(snapshot.recent_orders.is_empty());
    }

    #[test]
    fn test_new_product_params_use_api_names() {
        let product = NewProduct {
            product_name: "Wrench".to_string(),
            sku: "WR-9".to_string(),
            ..NewProduct::default()
        };
        let params = product.params();
        assert_eq!(params[0], ("productName", "Wrench"));
        assert_eq!(params[5], ("sku", "WR-9"));
    }
}
