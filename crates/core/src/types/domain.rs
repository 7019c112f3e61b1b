//! Data domains served by the spreadsheet API.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the five independently fetched data categories.
///
/// The lowercase name doubles as the `endpoint` query parameter of the
/// spreadsheet API and as the URL path of the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Dashboard,
    Inventory,
    Orders,
    Shipping,
    Customers,
}

impl Domain {
    /// All domains in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Inventory,
        Self::Orders,
        Self::Shipping,
        Self::Customers,
    ];

    /// The `endpoint` parameter sent to the spreadsheet API.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Inventory => "inventory",
            Self::Orders => "orders",
            Self::Shipping => "shipping",
            Self::Customers => "customers",
        }
    }

    /// Human-readable page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory",
            Self::Orders => "Orders",
            Self::Shipping => "Shipping",
            Self::Customers => "Customers",
        }
    }

    /// Dashboard path of the page that shows this domain.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Inventory => "/inventory",
            Self::Orders => "/orders",
            Self::Shipping => "/shipping",
            Self::Customers => "/customers",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.endpoint() == s)
            .ok_or_else(|| format!("invalid domain: {s}"))
    }
}
