//! Status badges and stock buckets.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Order status values the dashboard knows how to filter on.
pub const KNOWN_ORDER_STATUSES: [&str; 4] = ["Pending", "Shipping", "In Transit", "Delivered"];

/// Quantity at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// CSS class used when a status is missing or unrecognised.
pub const FALLBACK_STATUS_CLASS: &str = "status-pending";

/// Map an order, shipment or stock status to its badge class.
///
/// Total over all inputs: missing and unknown values get
/// [`FALLBACK_STATUS_CLASS`].
///
/// ```
/// use stockroom_core::status_class;
///
/// assert_eq!(status_class(Some("In Transit")), "status-shipping");
/// assert_eq!(status_class(Some("Lost at sea")), "status-pending");
/// assert_eq!(status_class(None), "status-pending");
/// ```
#[must_use]
pub fn status_class(status: Option<&str>) -> &'static str {
    match status {
        Some("Delivered") => "status-delivered",
        Some("Shipping" | "In Transit") => "status-shipping",
        Some("In Stock") => "status-in-stock",
        Some("Low Stock") => "status-low-stock",
        Some("Out of Stock") => "status-out-of-stock",
        _ => FALLBACK_STATUS_CLASS,
    }
}

/// Stock-level bucket of a product.
///
/// Buckets never overlap: `0` is out of stock, `1..=10` is low stock,
/// anything above is in stock. Negative counts (oversold rows) fall in no
/// bucket, the same as a blank quantity cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Bucket for a quantity in stock, `None` for negative quantities.
    #[must_use]
    pub const fn from_quantity(quantity: i64) -> Option<Self> {
        if quantity < 0 {
            None
        } else if quantity == 0 {
            Some(Self::OutOfStock)
        } else if quantity <= LOW_STOCK_THRESHOLD {
            Some(Self::LowStock)
        } else {
            Some(Self::InStock)
        }
    }

    /// Filter value / slug (`in-stock`, `low-stock`, `out-of-stock`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// Badge class (`status-in-stock`, ...).
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::InStock => "status-in-stock",
            Self::LowStock => "status-low-stock",
            Self::OutOfStock => "status-out-of-stock",
        }
    }

    /// Whether a quantity falls in this bucket.
    #[must_use]
    pub fn contains(self, quantity: i64) -> bool {
        Self::from_quantity(quantity) == Some(self)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Self::InStock),
            "low-stock" => Ok(Self::LowStock),
            "out-of-stock" => Ok(Self::OutOfStock),
            _ => Err(format!("invalid stock status: {s}")),
        }
    }
}
