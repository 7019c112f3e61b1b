//! Dashboard page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use stockroom_core::Domain;
use tracing::instrument;

use super::Chrome;
use super::orders::open_panel;
use crate::filters;
use crate::loaders::load_dashboard;
use crate::notices::Notices;
use crate::state::AppState;
use crate::views::dashboard::DashboardView;
use crate::views::orders::OrderDetailView;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub panel: Option<String>,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: Chrome,
    pub view: DashboardView,
    pub panel: Option<OrderDetailView>,
    pub close_href: String,
}

/// Display the dashboard with KPIs and recent orders.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> DashboardTemplate {
    let mut notices = Notices::new();
    let snapshot = load_dashboard(&state, &mut notices).await;
    let panel = open_panel(&state, query.panel.as_deref(), &mut notices).await;

    DashboardTemplate {
        chrome: Chrome::new(Domain::Dashboard, notices),
        view: DashboardView::build(snapshot.as_ref().map(|slot| slot.data.as_ref())),
        panel,
        close_href: Domain::Dashboard.path().to_string(),
    }
}
