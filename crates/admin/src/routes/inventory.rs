//! Inventory page, layout toggle and add-product modal.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use stockroom_core::{Domain, NewProduct, Product, StockStatus};
use tracing::{info, instrument};

use super::Chrome;
use crate::error::AppError;
use crate::filters;
use crate::loaders::load_inventory;
use crate::notices::Notices;
use crate::state::AppState;
use crate::view_state::InventoryLayout;
use crate::views::inventory::{InventoryFilter, InventoryView};

/// `?modal=` value that opens the add-product form.
pub const ADD_PRODUCT_MODAL: &str = "add-product";

/// `?notice=` value set after a product was written.
pub const PRODUCT_ADDED_NOTICE: &str = "product-added";

pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully!";

#[derive(Debug, Default, Deserialize)]
pub struct InventoryQuery {
    pub category: Option<String>,
    pub stock: Option<String>,
    pub modal: Option<String>,
    pub notice: Option<String>,
}

/// Layout toggle form. Carries the current filters so they survive the
/// redirect.
#[derive(Debug, Deserialize)]
pub struct LayoutForm {
    pub view: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<String>,
}

/// Add-product form. The active page filters ride along in hidden fields
/// so a failed submit re-renders the same view.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    #[serde(flatten)]
    pub product: NewProduct,
    #[serde(default, rename = "filterCategory")]
    pub filter_category: Option<String>,
    #[serde(default, rename = "filterStock")]
    pub filter_stock: Option<String>,
}

/// Inventory page template.
#[derive(Template, WebTemplate)]
#[template(path = "inventory.html")]
pub struct InventoryTemplate {
    pub chrome: Chrome,
    pub view: InventoryView,
    /// Current filters as a query string (empty when unfiltered).
    pub filter_query: String,
    pub category_value: String,
    pub stock_value: String,
    pub modal_open: bool,
    pub form: NewProduct,
}

impl InventoryTemplate {
    fn new(
        notices: Notices,
        products: Option<&[Product]>,
        filter: &InventoryFilter,
        layout: InventoryLayout,
    ) -> Self {
        let category_value = filter.category.clone().unwrap_or_default();
        let stock_value = filter.stock.map(|s| s.as_str().to_string()).unwrap_or_default();
        Self {
            chrome: Chrome::new(Domain::Inventory, notices),
            view: InventoryView::build(products, filter, layout),
            filter_query: filter_query(&category_value, &stock_value),
            category_value,
            stock_value,
            modal_open: false,
            form: NewProduct::default(),
        }
    }

    /// Inventory path with the current filters plus `extra`.
    #[must_use]
    pub fn href_with(&self, extra: &str) -> String {
        match (self.filter_query.is_empty(), extra.is_empty()) {
            (true, true) => Domain::Inventory.path().to_string(),
            (true, false) => format!("{}?{extra}", Domain::Inventory.path()),
            (false, true) => format!("{}?{}", Domain::Inventory.path(), self.filter_query),
            (false, false) => format!(
                "{}?{}&{extra}",
                Domain::Inventory.path(),
                self.filter_query
            ),
        }
    }
}

/// Display the inventory page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> InventoryTemplate {
    let mut notices = Notices::new();
    let products = load_inventory(&state, &mut notices).await;

    if query.notice.as_deref() == Some(PRODUCT_ADDED_NOTICE) {
        notices.success(PRODUCT_ADDED_MESSAGE);
    }

    let filter = InventoryFilter::from_query(query.category.as_deref(), query.stock.as_deref());
    let layout = state.view().layout().await;

    let mut template = InventoryTemplate::new(
        notices,
        products.as_ref().map(|slot| slot.data.as_slice()),
        &filter,
        layout,
    );
    template.modal_open = query.modal.as_deref() == Some(ADD_PRODUCT_MODAL);
    template
}

/// Persist the grid/table layout and go back to the inventory page.
///
/// # Errors
///
/// Returns 400 if the layout is neither `grid` nor `table`.
#[instrument(skip(state))]
pub async fn set_layout(
    State(state): State<AppState>,
    Form(form): Form<LayoutForm>,
) -> Result<Redirect, AppError> {
    let layout: InventoryLayout = form.view.parse().map_err(AppError::BadRequest)?;
    state.view().set_layout(layout).await;

    let query = filter_query(
        form.category.as_deref().unwrap_or_default(),
        form.stock.as_deref().unwrap_or_default(),
    );
    Ok(if query.is_empty() {
        Redirect::to(Domain::Inventory.path())
    } else {
        Redirect::to(&format!("{}?{query}", Domain::Inventory.path()))
    })
}

/// Add a product through the spreadsheet API.
///
/// On success redirects to the inventory page, which refetches and shows
/// the success notice. On failure re-renders the cached inventory with the
/// modal still open, the submitted values in the form and the same filters.
#[instrument(skip(state, form))]
pub async fn create_product(
    State(state): State<AppState>,
    Form(form): Form<AddProductForm>,
) -> Response {
    let filter = InventoryFilter::from_query(
        form.filter_category.as_deref(),
        form.filter_stock.as_deref(),
    );

    match state.sheets().create_product(&form.product).await {
        Ok(()) => {
            info!("Product added");
            let query = filter_query(
                filter.category.as_deref().unwrap_or_default(),
                filter.stock.map(StockStatus::as_str).unwrap_or_default(),
            );
            let notice = format!("notice={PRODUCT_ADDED_NOTICE}");
            let location = if query.is_empty() {
                format!("{}?{notice}", Domain::Inventory.path())
            } else {
                format!("{}?{query}&{notice}", Domain::Inventory.path())
            };
            Redirect::to(&location).into_response()
        }
        Err(e) => {
            let mut notices = Notices::new();
            notices.error(format!("Failed to load {}: {e}", Domain::Inventory.endpoint()));

            let products = state.view().get::<Vec<Product>>().await;
            let layout = state.view().layout().await;
            let mut template = InventoryTemplate::new(
                notices,
                products.as_ref().map(|slot| slot.data.as_slice()),
                &filter,
                layout,
            );
            template.modal_open = true;
            template.form = form.product;

            (StatusCode::BAD_GATEWAY, template).into_response()
        }
    }
}

/// Query string for the category and stock filters, skipping empty ones.
fn filter_query(category: &str, stock: &str) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !category.is_empty() {
        query.append_pair("category", category);
    }
    if !stock.is_empty() {
        query.append_pair("stock", stock);
    }
    query.finish()
}
