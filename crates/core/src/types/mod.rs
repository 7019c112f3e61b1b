//! Core types for Stockroom.
//!
//! Records decoded from the spreadsheet API plus the pure display rules
//! shared by every page.

pub mod cell;
pub mod date;
pub mod domain;
pub mod price;
pub mod record;
pub mod status;

pub use date::{MISSING_DATE, format_date, parse_date};
pub use domain::Domain;
pub use price::{format_count, format_grouped, format_money};
pub use record::{Customer, DashboardSnapshot, Kpis, NewProduct, Order, Product, Shipment};
pub use status::*;
