//! Reusable page components.

pub mod select_filter;

pub use select_filter::{FilterOption, SelectFilter, distinct_values};
