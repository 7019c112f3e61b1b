//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::sheets::{ApiError, SheetsClient};
use crate::view_state::ViewState;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration, the spreadsheet
/// API client and the per-domain view cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    sheets: SheetsClient,
    view: ViewState,
}

impl AppState {
    /// Create a new application state with an empty view cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the spreadsheet client cannot be created.
    pub fn new(config: DashboardConfig) -> Result<Self, ApiError> {
        let sheets = SheetsClient::new(&config.sheets)?;
        let view = ViewState::new(config.fetch_policy);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                sheets,
                view,
            }),
        })
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Get a reference to the spreadsheet API client.
    #[must_use]
    pub fn sheets(&self) -> &SheetsClient {
        &self.inner.sheets
    }

    /// Get a reference to the view cache.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.inner.view
    }
}
