//! Shipping page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use stockroom_core::Domain;
use tracing::instrument;

use super::Chrome;
use crate::filters;
use crate::loaders::load_shipping;
use crate::notices::Notices;
use crate::state::AppState;
use crate::views::shipping::{ShippingFilter, ShippingView};

#[derive(Debug, Default, Deserialize)]
pub struct ShippingQuery {
    pub status: Option<String>,
    pub courier: Option<String>,
}

/// Shipping page template.
#[derive(Template, WebTemplate)]
#[template(path = "shipping.html")]
pub struct ShippingTemplate {
    pub chrome: Chrome,
    pub view: ShippingView,
}

/// Display the shipping page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShippingQuery>,
) -> ShippingTemplate {
    let mut notices = Notices::new();
    let shipments = load_shipping(&state, &mut notices).await;
    let filter = ShippingFilter::from_query(query.status.as_deref(), query.courier.as_deref());

    ShippingTemplate {
        chrome: Chrome::new(Domain::Shipping, notices),
        view: ShippingView::build(shipments.as_ref().map(|slot| slot.data.as_slice()), &filter),
    }
}
