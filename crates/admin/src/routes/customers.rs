//! Customers page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use stockroom_core::{Domain, Order};
use tracing::instrument;

use super::Chrome;
use crate::filters;
use crate::loaders::load_customers;
use crate::notices::Notices;
use crate::state::AppState;
use crate::views::customers::CustomersView;

/// Customers page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers.html")]
pub struct CustomersTemplate {
    pub chrome: Chrome,
    pub view: CustomersView,
}

/// Display the customers page.
///
/// Refetches customers only; order statistics come from the orders last
/// loaded by the orders page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> CustomersTemplate {
    let mut notices = Notices::new();
    let customers = load_customers(&state, &mut notices).await;
    let orders = state.view().get::<Vec<Order>>().await;

    let view = CustomersView::build(
        customers.as_ref().map(|slot| slot.data.as_slice()),
        orders
            .as_ref()
            .map(|slot| (slot.data.as_slice(), slot.fetched_at)),
    );

    CustomersTemplate {
        chrome: Chrome::new(Domain::Customers, notices),
        view,
    }
}
