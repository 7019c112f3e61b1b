//! Integration test harness for the Stockroom dashboard.
//!
//! Each test starts two in-process servers on ephemeral ports: a fake
//! spreadsheet API ([`FakeSheets`]) and the dashboard itself
//! ([`TestApp`]) pointed at it.
//!
//! ```rust,ignore
//! let sheets = FakeSheets::new();
//! sheets.ok("orders", json!([{"Order ID": "ORD-1"}]));
//! let app = TestApp::spawn(sheets).await;
//! let (status, html) = app.get_html("/orders").await;
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use stockroom_admin::config::DashboardConfig;
use stockroom_admin::state::AppState;

/// Canned answer for one `endpoint`/`action` pair.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this JSON body.
    Body(Value),
    /// Bare HTTP status with an empty body.
    Status(u16),
}

#[derive(Default)]
struct FakeState {
    replies: HashMap<(String, String), Reply>,
    requests: Vec<HashMap<String, String>>,
}

/// Fake spreadsheet API with scripted replies.
///
/// Unscripted calls answer `{"success": false, "error": "Unknown endpoint"}`.
#[derive(Clone, Default)]
pub struct FakeSheets {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeSheets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint`/`action` with a raw body.
    pub fn reply(&self, endpoint: &str, action: &str, reply: Reply) {
        self.inner
            .lock()
            .unwrap()
            .replies
            .insert((endpoint.to_string(), action.to_string()), reply);
    }

    /// Answer reads of `endpoint` with a successful envelope around `data`.
    pub fn ok(&self, endpoint: &str, data: Value) {
        self.reply(
            endpoint,
            "read",
            Reply::Body(json!({"success": true, "data": data})),
        );
    }

    /// Answer reads of `endpoint` with an API-level failure.
    pub fn fail(&self, endpoint: &str, error: &str) {
        self.reply(
            endpoint,
            "read",
            Reply::Body(json!({"success": false, "error": error})),
        );
    }

    /// Every query received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Number of calls made for `endpoint`/`action`.
    #[must_use]
    pub fn calls(&self, endpoint: &str, action: &str) -> usize {
        self.requests()
            .iter()
            .filter(|q| {
                q.get("endpoint").map(String::as_str) == Some(endpoint)
                    && q.get("action").map(String::as_str) == Some(action)
            })
            .count()
    }

    /// Serve on an ephemeral port and return the API URL.
    pub async fn serve(&self) -> String {
        let router = Router::new()
            .route("/exec", get(answer))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/exec")
    }
}

async fn answer(
    State(fake): State<FakeSheets>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let key = (
        query.get("endpoint").cloned().unwrap_or_default(),
        query.get("action").cloned().unwrap_or_default(),
    );
    let reply = {
        let mut state = fake.inner.lock().unwrap();
        state.requests.push(query);
        state.replies.get(&key).cloned()
    };

    match reply {
        Some(Reply::Body(body)) => Json(body).into_response(),
        Some(Reply::Status(code)) => StatusCode::from_u16(code).unwrap().into_response(),
        None => Json(json!({"success": false, "error": "Unknown endpoint"})).into_response(),
    }
}

/// A running dashboard wired to a [`FakeSheets`].
pub struct TestApp {
    pub url: String,
    pub client: reqwest::Client,
    pub sheets: FakeSheets,
    pub state: AppState,
}

impl TestApp {
    /// Start the dashboard with the default fetch policy.
    pub async fn spawn(sheets: FakeSheets) -> Self {
        Self::spawn_with(sheets, &[]).await
    }

    /// Start the dashboard with extra configuration variables.
    pub async fn spawn_with(sheets: FakeSheets, vars: &[(&str, &str)]) -> Self {
        let api_url = sheets.serve().await;
        let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../admin/static");

        let mut env: HashMap<String, String> = HashMap::from([
            ("STOCKROOM_API_URL".to_string(), api_url),
            ("STOCKROOM_STATIC_DIR".to_string(), static_dir.to_string()),
        ]);
        env.extend(vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));

        let config = DashboardConfig::from_lookup(|key: &str| env.get(key).cloned()).unwrap();
        let state = AppState::new(config).unwrap();
        let router = stockroom_admin::app(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            url: format!("http://{addr}"),
            client,
            sheets,
            state,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.url))
            .send()
            .await
            .unwrap()
    }

    /// GET a page and return its status and body.
    pub async fn get_html(&self, path: &str) -> (reqwest::StatusCode, String) {
        let response = self.get(path).await;
        let status = response.status();
        (status, response.text().await.unwrap())
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.url))
            .form(form)
            .send()
            .await
            .unwrap()
    }
}

/// Location header of a redirect response.
#[must_use]
pub fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
