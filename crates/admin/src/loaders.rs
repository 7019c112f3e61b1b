//! Fetch-and-cache operations, one per domain.
//!
//! A load always hits the API. On success the payload replaces the cached
//! one; on failure a notice is raised and the cached payload (if any) is
//! returned so the page keeps showing the last good rows.

use stockroom_core::{Customer, DashboardSnapshot, Order, Product, Shipment};
use tracing::{debug, instrument};

use crate::notices::Notices;
use crate::state::AppState;
use crate::view_state::{Payload, Slot};

/// Refetch a domain and return what the cache holds afterwards.
#[instrument(skip_all, fields(domain = %P::DOMAIN))]
pub async fn load<P: Payload>(state: &AppState, notices: &mut Notices) -> Option<Slot<P>> {
    let view = state.view();
    let ticket = view.begin::<P>();

    match state.sheets().read::<P>(P::DOMAIN).await {
        Ok(Some(data)) => {
            if view.commit(ticket, data).await {
                debug!(ticket, "Stored fresh payload");
            }
        }
        // Success without data leaves the cache untouched.
        Ok(None) => debug!("API returned no data"),
        Err(e) => notices.error(format!("Failed to load {}: {e}", P::DOMAIN.endpoint())),
    }

    view.get::<P>().await
}

pub async fn load_dashboard(
    state: &AppState,
    notices: &mut Notices,
) -> Option<Slot<DashboardSnapshot>> {
    load(state, notices).await
}

pub async fn load_inventory(state: &AppState, notices: &mut Notices) -> Option<Slot<Vec<Product>>> {
    load(state, notices).await
}

pub async fn load_orders(state: &AppState, notices: &mut Notices) -> Option<Slot<Vec<Order>>> {
    load(state, notices).await
}

pub async fn load_shipping(state: &AppState, notices: &mut Notices) -> Option<Slot<Vec<Shipment>>> {
    load(state, notices).await
}

pub async fn load_customers(
    state: &AppState,
    notices: &mut Notices,
) -> Option<Slot<Vec<Customer>>> {
    load(state, notices).await
}
