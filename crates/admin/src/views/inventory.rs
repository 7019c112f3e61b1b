//! Inventory page view.

use stockroom_core::{Product, StockStatus, format_money};

use super::non_empty;
use crate::components::{SelectFilter, distinct_values};
use crate::view_state::InventoryLayout;

/// Category and stock-level filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub category: Option<String>,
    pub stock: Option<StockStatus>,
}

impl InventoryFilter {
    /// Build from raw query values. Empty or unknown values do not filter.
    #[must_use]
    pub fn from_query(category: Option<&str>, stock: Option<&str>) -> Self {
        Self {
            category: non_empty(category).map(str::to_string),
            stock: non_empty(stock).and_then(|s| s.parse().ok()),
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category.as_deref() == Some(c));
        let stock_ok = self
            .stock
            .is_none_or(|bucket| product.quantity.is_some_and(|q| bucket.contains(q)));
        category_ok && stock_ok
    }

    /// Matching products in API order.
    pub fn apply<'a>(&'a self, products: &'a [Product]) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(|p| self.matches(p))
    }
}

/// Category dropdown built from the loaded products.
#[must_use]
pub fn category_filter(products: &[Product], current: Option<&str>) -> SelectFilter {
    SelectFilter::new("category", "Category", "All Categories")
        .values(distinct_values(products.iter().map(|p| p.category.as_deref())))
        .select(current)
}

/// Stock-level dropdown.
#[must_use]
pub fn stock_filter(current: Option<StockStatus>) -> SelectFilter {
    [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ]
    .into_iter()
    .fold(
        SelectFilter::new("stock", "Stock level", "All Stock Levels"),
        |filter, s| filter.option(s.as_str(), s.label()),
    )
    .select(current.map(StockStatus::as_str))
}

/// One product card / table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: String,
    /// Quantity as shown, empty when the cell is blank.
    pub quantity: String,
    /// Badge class, `None` when the quantity is blank.
    pub stock_class: Option<&'static str>,
    pub total_value: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone().unwrap_or_default(),
            subcategory: product.subcategory.clone().unwrap_or_default(),
            price: format_money(product.unit_price.unwrap_or_default()),
            quantity: product.quantity.map(|q| q.to_string()).unwrap_or_default(),
            stock_class: product.stock_status().map(StockStatus::css_class),
            total_value: format_money(product.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub layout: InventoryLayout,
    pub category: SelectFilter,
    pub stock: SelectFilter,
    pub products: Vec<ProductView>,
    pub loaded: bool,
}

impl InventoryView {
    #[must_use]
    pub fn build(
        products: Option<&[Product]>,
        filter: &InventoryFilter,
        layout: InventoryLayout,
    ) -> Self {
        let all = products.unwrap_or_default();
        Self {
            layout,
            category: category_filter(all, filter.category.as_deref()),
            stock: stock_filter(filter.stock),
            products: filter.apply(all).map(ProductView::from).collect(),
            loaded: products.is_some(),
        }
    }

    #[must_use]
    pub fn is_grid(&self) -> bool {
        self.layout == InventoryLayout::Grid
    }

    /// Dropdowns in display order.
    #[must_use]
    pub fn filters(&self) -> Vec<&SelectFilter> {
        vec![&self.category, &self.stock]
    }
}
