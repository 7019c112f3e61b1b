//! Stockroom Core - Shared types library.
//!
//! This crate provides the record types and display rules used by the
//! dashboard:
//! - `admin` - The dashboard server (API client, view state, pages)
//! - `integration-tests` - End-to-end tests against a fake spreadsheet API
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Every rule that decides what a page shows (stock buckets, status
//! styles, date and money formatting) lives here so it can be tested without
//! a server.
//!
//! # Modules
//!
//! - [`types`] - Spreadsheet records, domains, statuses, money and dates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
