//! Dashboard page view.

use stockroom_core::{DashboardSnapshot, format_grouped};

use super::OrderRow;

/// Maximum recent orders shown on the dashboard.
pub const RECENT_ORDERS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiView {
    /// `$` plus thousands-grouped sales.
    pub total_sales: String,
    pub total_orders: i64,
    pub pending_orders: i64,
    pub low_stock_items: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    /// `None` until the dashboard has loaded once.
    pub kpis: Option<KpiView>,
    pub recent_orders: Vec<OrderRow>,
}

impl DashboardView {
    #[must_use]
    pub fn build(snapshot: Option<&DashboardSnapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::default();
        };

        let kpis = &snapshot.kpis;
        Self {
            kpis: Some(KpiView {
                total_sales: format!("${}", format_grouped(kpis.total_sales)),
                total_orders: kpis.total_orders,
                pending_orders: kpis.pending_orders,
                low_stock_items: kpis.low_stock_items,
            }),
            recent_orders: snapshot
                .recent_orders
                .iter()
                .take(RECENT_ORDERS_LIMIT)
                .map(OrderRow::from)
                .collect(),
        }
    }
}
