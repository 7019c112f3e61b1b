//! Orders page and order detail panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use stockroom_core::{Domain, Order};
use tracing::instrument;

use super::Chrome;
use crate::error::AppError;
use crate::filters;
use crate::loaders::load_orders;
use crate::notices::Notices;
use crate::state::AppState;
use crate::views::orders::{OrderDetailView, OrderFilter, OrdersView};

/// Notice shown when a panel is requested for an unknown order.
pub const ORDER_NOT_FOUND: &str = "Order not found";

#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub status: Option<String>,
    pub panel: Option<String>,
}

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub chrome: Chrome,
    pub view: OrdersView,
    pub panel: Option<OrderDetailView>,
    /// Link that closes the panel, keeping the current filter.
    pub close_href: String,
}

impl OrdersTemplate {
    /// Link that opens the panel for `id` over the current filter.
    #[must_use]
    pub fn panel_href(&self, id: &str) -> String {
        let panel = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("panel", id)
            .finish();
        let separator = if self.close_href.contains('?') { '&' } else { '?' };
        format!("{}{separator}{panel}", self.close_href)
    }
}

/// Detail panel fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_panel.html")]
pub struct OrderPanelTemplate {
    pub panel: OrderDetailView,
    pub close_href: String,
}

/// Look up the order named by `?panel=` in the cached orders.
///
/// Raises the "Order not found" notice when the ID is unknown or orders
/// were never loaded.
pub async fn open_panel(
    state: &AppState,
    id: Option<&str>,
    notices: &mut Notices,
) -> Option<OrderDetailView> {
    let id = id.filter(|id| !id.is_empty())?;
    let orders = state.view().get::<Vec<Order>>().await;
    let panel = orders.and_then(|slot| OrderDetailView::find(&slot.data, id));
    if panel.is_none() {
        notices.error(ORDER_NOT_FOUND);
    }
    panel
}

/// Display the orders page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> OrdersTemplate {
    let mut notices = Notices::new();
    let orders = load_orders(&state, &mut notices).await;
    let panel = open_panel(&state, query.panel.as_deref(), &mut notices).await;

    let filter = OrderFilter::from_query(query.status.as_deref());
    let view = OrdersView::build(orders.as_ref().map(|slot| slot.data.as_slice()), &filter);

    OrdersTemplate {
        chrome: Chrome::new(Domain::Orders, notices),
        view,
        panel,
        close_href: orders_href(filter.status.as_deref()),
    }
}

/// Render the detail panel for one cached order.
///
/// # Errors
///
/// Returns 404 with the "Order not found" notice if the order is not in
/// the cached orders.
#[instrument(skip(state))]
pub async fn panel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<OrderPanelTemplate, AppError> {
    let orders = state.view().get::<Vec<Order>>().await;
    let panel = orders
        .and_then(|slot| OrderDetailView::find(&slot.data, &id))
        .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.to_string()))?;

    Ok(OrderPanelTemplate {
        panel,
        close_href: Domain::Orders.path().to_string(),
    })
}

fn orders_href(status: Option<&str>) -> String {
    match status {
        Some(status) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("status", status)
                .finish();
            format!("{}?{query}", Domain::Orders.path())
        }
        None => Domain::Orders.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_href_keeps_filter() {
        assert_eq!(orders_href(None), "/orders");
        assert_eq!(orders_href(Some("In Transit")), "/orders?status=In+Transit");
    }

    fn template(status: Option<&str>) -> OrdersTemplate {
        OrdersTemplate {
            chrome: Chrome::new(Domain::Orders, Notices::new()),
            view: OrdersView::build(None, &OrderFilter::from_query(status)),
            panel: None,
            close_href: orders_href(status),
        }
    }

    #[test]
    fn test_panel_href_keeps_filter() {
        assert_eq!(template(None).panel_href("ORD-1"), "/orders?panel=ORD-1");
        assert_eq!(
            template(Some("Pending")).panel_href("ORD 7"),
            "/orders?status=Pending&panel=ORD+7"
        );
    }
}
