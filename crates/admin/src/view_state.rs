//! Process-wide cache of the last payload fetched for each domain.
//!
//! Every page load refetches its domain and commits the result here. The
//! cache lets a failed refetch keep showing the previous rows, and lets the
//! customers page join against whatever orders were last loaded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use stockroom_core::{Customer, DashboardSnapshot, Domain, Order, Product, Shipment};
use tokio::sync::RwLock;
use tracing::debug;

/// How concurrent fetches of the same domain resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Whichever response arrives last is stored.
    #[default]
    LastResponseWins,
    /// A response older than the newest stored one is dropped.
    LatestRequestWins,
}

impl FetchPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastResponseWins => "last-response",
            Self::LatestRequestWins => "latest-request",
        }
    }
}

impl std::str::FromStr for FetchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-response" => Ok(Self::LastResponseWins),
            "latest-request" => Ok(Self::LatestRequestWins),
            _ => Err(format!(
                "invalid fetch policy: {s} (expected last-response or latest-request)"
            )),
        }
    }
}

/// Inventory page layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventoryLayout {
    #[default]
    Grid,
    Table,
}

impl InventoryLayout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Table => "table",
        }
    }
}

impl std::str::FromStr for InventoryLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "table" => Ok(Self::Table),
            _ => Err(format!("invalid layout: {s}")),
        }
    }
}

/// A committed payload.
#[derive(Debug)]
pub struct Slot<T> {
    pub data: Arc<T>,
    pub fetched_at: DateTime<Utc>,
    /// Ticket of the fetch that produced this payload.
    pub generation: u64,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            fetched_at: self.fetched_at,
            generation: self.generation,
        }
    }
}

/// Storage for one domain.
#[derive(Debug)]
pub struct SlotCell<T> {
    next_ticket: AtomicU64,
    current: RwLock<Option<Slot<T>>>,
}

impl<T> Default for SlotCell<T> {
    fn default() -> Self {
        Self {
            next_ticket: AtomicU64::new(1),
            current: RwLock::new(None),
        }
    }
}

/// A payload type that owns a slot in [`ViewState`].
pub trait Payload: DeserializeOwned + Send + Sync + 'static {
    /// Domain the payload is fetched from.
    const DOMAIN: Domain;

    /// The slot holding this payload.
    fn slot(view: &ViewState) -> &SlotCell<Self>;
}

impl Payload for DashboardSnapshot {
    const DOMAIN: Domain = Domain::Dashboard;

    fn slot(view: &ViewState) -> &SlotCell<Self> {
        &view.dashboard
    }
}

impl Payload for Vec<Product> {
    const DOMAIN: Domain = Domain::Inventory;

    fn slot(view: &ViewState) -> &SlotCell<Self> {
        &view.inventory
    }
}

impl Payload for Vec<Order> {
    const DOMAIN: Domain = Domain::Orders;

    fn slot(view: &ViewState) -> &SlotCell<Self> {
        &view.orders
    }
}

impl Payload for Vec<Shipment> {
    const DOMAIN: Domain = Domain::Shipping;

    fn slot(view: &ViewState) -> &SlotCell<Self> {
        &view.shipping
    }
}

impl Payload for Vec<Customer> {
    const DOMAIN: Domain = Domain::Customers;

    fn slot(view: &ViewState) -> &SlotCell<Self> {
        &view.customers
    }
}

/// Per-domain payload cache plus the inventory layout toggle.
#[derive(Debug, Default)]
pub struct ViewState {
    policy: FetchPolicy,
    dashboard: SlotCell<DashboardSnapshot>,
    inventory: SlotCell<Vec<Product>>,
    orders: SlotCell<Vec<Order>>,
    shipping: SlotCell<Vec<Shipment>>,
    customers: SlotCell<Vec<Customer>>,
    layout: RwLock<InventoryLayout>,
}

impl ViewState {
    #[must_use]
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Issue a ticket for a fetch that is about to start.
    ///
    /// Tickets increase monotonically per domain in request order.
    pub fn begin<P: Payload>(&self) -> u64 {
        P::slot(self).next_ticket.fetch_add(1, Ordering::Relaxed)
    }

    /// Store a fetched payload, fully replacing the previous one.
    ///
    /// Returns `false` if the policy discarded it as stale.
    pub async fn commit<P: Payload>(&self, ticket: u64, data: P) -> bool {
        let mut current = P::slot(self).current.write().await;

        if self.policy == FetchPolicy::LatestRequestWins
            && let Some(existing) = current.as_ref()
            && existing.generation > ticket
        {
            debug!(
                domain = %P::DOMAIN,
                ticket,
                stored = existing.generation,
                "Discarding stale response"
            );
            return false;
        }

        *current = Some(Slot {
            data: Arc::new(data),
            fetched_at: Utc::now(),
            generation: ticket,
        });
        true
    }

    /// Last committed payload, if the domain was ever loaded.
    pub async fn get<P: Payload>(&self) -> Option<Slot<P>> {
        P::slot(self).current.read().await.clone()
    }

    pub async fn layout(&self) -> InventoryLayout {
        *self.layout.read().await
    }

    pub async fn set_layout(&self, layout: InventoryLayout) {
        *self.layout.write().await = layout;
    }
}
