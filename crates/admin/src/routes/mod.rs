//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Pages (every GET refetches its domain)
//! GET  /                       - Dashboard (?panel=ID opens the order panel)
//! GET  /inventory              - Inventory (?category, ?stock, ?modal, ?notice)
//! GET  /orders                 - Orders (?status, ?panel)
//! GET  /shipping               - Shipping (?status, ?courier)
//! GET  /customers              - Customers
//!
//! # Inventory actions
//! POST /inventory/layout       - Switch between grid and table layout
//! POST /inventory/products     - Add a product
//!
//! # Fragments
//! GET  /orders/{id}/panel      - Order detail panel from the cached orders
//! ```

pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod shipping;

use axum::{
    Router,
    routing::{get, post},
};
use stockroom_core::Domain;

use crate::notices::{Notice, Notices};
use crate::state::AppState;

/// Create the page routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/inventory", get(inventory::index))
        .route("/inventory/layout", post(inventory::set_layout))
        .route("/inventory/products", post(inventory::create_product))
        .route("/orders", get(orders::index))
        .route("/orders/{id}/panel", get(orders::panel))
        .route("/shipping", get(shipping::index))
        .route("/customers", get(customers::index))
}

/// Sidebar navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Sidebar entries with exactly one marked active.
#[must_use]
pub fn nav_items(active: Domain) -> Vec<NavItem> {
    Domain::ALL
        .into_iter()
        .map(|domain| NavItem {
            label: domain.title(),
            href: domain.path(),
            active: domain == active,
        })
        .collect()
}

/// Page frame shared by every full-page template.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    pub notices: Vec<Notice>,
}

impl Chrome {
    #[must_use]
    pub fn new(page: Domain, notices: Notices) -> Self {
        Self {
            title: page.title(),
            nav: nav_items(page),
            notices: notices.into_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_nav_item_is_active() {
        for page in Domain::ALL {
            let nav = nav_items(page);
            assert_eq!(nav.len(), Domain::ALL.len());
            let active: Vec<_> = nav.iter().filter(|n| n.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].href, page.path());
        }
    }
}
