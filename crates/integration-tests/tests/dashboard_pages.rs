//! Page rendering against a fake spreadsheet API.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use stockroom_integration_tests::{FakeSheets, Reply, TestApp};

fn orders() -> serde_json::Value {
    json!([
        {
            "Order ID": "ORD-1",
            "Customer ID": "C1",
            "Customer Name": "Aisha Karim",
            "Order Date": "2024-01-05",
            "Subtotal": 100,
            "Total After Discount": 90,
            "Status": "Pending",
            "Items (Product × Qty)": "Claw Hammer × 2",
            "Address": "12 Palm St"
        },
        {
            "Order ID": "ORD-2",
            "Customer ID": "C1",
            "Customer Name": "Aisha Karim",
            "Order Date": "2024-03-10",
            "Subtotal": "40",
            "Status": "Delivered"
        }
    ])
}

// =============================================================================
// Basics
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn(FakeSheets::new()).await;
    let (status, body) = app.get_html("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = TestApp::spawn(FakeSheets::new()).await;
    let response = app.get("/static/css/main.css").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::spawn(FakeSheets::new()).await;

    let response = app.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));

    let response = app
        .client
        .get(format!("{}/health", app.url))
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_renders_kpis_and_recent_orders() {
    let sheets = FakeSheets::new();
    sheets.ok(
        "dashboard",
        json!({
            "kpis": {"totalSales": 15234.5, "totalOrders": 1287, "pendingOrders": 12, "lowStockItems": 3},
            "recentOrders": orders()
        }),
    );
    let app = TestApp::spawn(sheets).await;

    let (status, html) = app.get_html("/").await;
    assert_eq!(status, 200);
    assert!(html.contains("$15,234.5"));
    assert!(html.contains("1,287"));
    assert!(html.contains("ORD-1"));
    assert!(html.contains("$90.00"));
    assert!(html.contains("Jan 5, 2024"));
    assert!(html.contains("status-badge status-delivered"));
    assert!(html.contains(r#"aria-current="page">Dashboard<"#));
    assert_eq!(app.sheets.calls("dashboard", "read"), 1);
}

#[tokio::test]
async fn test_every_navigation_refetches() {
    let sheets = FakeSheets::new();
    sheets.ok("orders", orders());
    let app = TestApp::spawn(sheets).await;

    app.get_html("/orders").await;
    app.get_html("/orders").await;
    assert_eq!(app.sheets.calls("orders", "read"), 2);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_api_failure_shows_notice() {
    let sheets = FakeSheets::new();
    sheets.fail("shipping", "Sheet Shipping not found");
    let app = TestApp::spawn(sheets).await;

    let (status, html) = app.get_html("/shipping").await;
    assert_eq!(status, 200);
    assert!(html.contains("<dialog open"));
    assert!(html.contains("Failed to load shipping: Sheet Shipping not found"));
    assert!(html.contains("Shipping not loaded"));
}

#[tokio::test]
async fn test_http_failure_keeps_previous_rows() {
    let sheets = FakeSheets::new();
    sheets.ok("orders", orders());
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/orders").await;
    assert!(html.contains("ORD-2"));
    assert!(!html.contains("<dialog open"));

    app.sheets.reply("orders", "read", Reply::Status(500));
    let (status, html) = app.get_html("/orders").await;
    assert_eq!(status, 200);
    assert!(html.contains("Failed to load orders: HTTP error! status: 500"));
    assert!(html.contains("ORD-2"));
}

#[tokio::test]
async fn test_missing_fallback_message() {
    let sheets = FakeSheets::new();
    sheets.reply("customers", "read", Reply::Body(json!({"success": false})));
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/customers").await;
    assert!(html.contains("Failed to load customers: Unknown API error"));
}

// =============================================================================
// Orders and detail panel
// =============================================================================

#[tokio::test]
async fn test_orders_status_filter() {
    let sheets = FakeSheets::new();
    sheets.ok("orders", orders());
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/orders?status=Delivered").await;
    assert!(html.contains("ORD-2"));
    assert!(!html.contains("ORD-1"));
    assert!(html.contains(r#"<option value="Delivered" selected>"#));
    // Opening a panel keeps the filter behind it.
    assert!(html.contains(r#"href="/orders?status=Delivered&amp;panel=ORD-2""#));

    let (_, html) = app.get_html("/orders?status=In+Transit").await;
    assert!(html.contains("No orders found"));
}

#[tokio::test]
async fn test_panel_fragment() {
    let sheets = FakeSheets::new();
    sheets.ok("orders", orders());
    let app = TestApp::spawn(sheets).await;

    // Nothing cached yet.
    let (status, html) = app.get_html("/orders/ORD-1/panel").await;
    assert_eq!(status, 404);
    assert!(html.contains("Order not found"));

    app.get_html("/orders").await;
    let (status, html) = app.get_html("/orders/ORD-1/panel").await;
    assert_eq!(status, 200);
    assert!(html.contains("Claw Hammer × 2"));
    assert!(html.contains("No phone"));
    assert!(html.contains("12 Palm St"));
    assert!(html.contains("$90.00"));

    let (_, html) = app.get_html("/orders/ORD-2/panel").await;
    assert!(html.contains("No items specified"));
    assert!(html.contains("No address"));
    assert!(html.contains("$40.00"));

    let (status, _) = app.get_html("/orders/ORD-404/panel").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_panel_on_page() {
    let sheets = FakeSheets::new();
    sheets.ok("orders", orders());
    sheets.ok("dashboard", json!({"kpis": {}, "recentOrders": []}));
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/orders?panel=ORD-1").await;
    assert!(html.contains(r#"id="order-panel""#));

    let (status, html) = app.get_html("/?panel=ORD-404").await;
    assert_eq!(status, 200);
    assert!(!html.contains(r#"id="order-panel""#));
    assert!(html.contains("Order not found"));
}

// =============================================================================
// Shipping and customers
// =============================================================================

#[tokio::test]
async fn test_unlisted_status_stays_selected() {
    let sheets = FakeSheets::new();
    sheets.ok(
        "shipping",
        json!([{"Tracking Number": "TRK-1", "Order ID": "ORD-1", "Customer Name": "Aisha", "Shipping Status": "In Transit"}]),
    );
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/shipping?status=Returned").await;
    assert!(html.contains("No shipments found"));
    assert!(html.contains(r#"<option value="Returned" selected>Returned</option>"#));
}

#[tokio::test]
async fn test_shipping_filters_and_placeholders() {
    let sheets = FakeSheets::new();
    sheets.ok(
        "shipping",
        json!([
            {"Tracking Number": "TRK-1", "Order ID": "ORD-1", "Customer Name": "Aisha", "Courier": "Aramex", "Shipping Status": "In Transit", "Shipping Date": "2024-01-06"},
            {"Order ID": "ORD-2", "Customer Name": "Omar", "Shipping Status": "Pending"},
            {"Tracking Number": "TRK-3", "Order ID": "ORD-3", "Customer Name": "Lina", "Courier": "DHL", "Shipping Status": "In Transit"}
        ]),
    );
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/shipping").await;
    assert!(html.contains("<td><strong>N/A</strong></td>"));
    assert!(html.contains(r#"<option value="Aramex">Aramex</option>"#));

    let (_, html) = app
        .get_html("/shipping?status=In+Transit&courier=Aramex")
        .await;
    assert!(html.contains("TRK-1"));
    assert!(!html.contains("TRK-3"));
    assert!(!html.contains("ORD-2"));

    let (_, html) = app.get_html("/shipping?status=Delivered").await;
    assert!(html.contains("No shipments found"));
}

#[tokio::test]
async fn test_customers_join_cached_orders() {
    let sheets = FakeSheets::new();
    sheets.ok("orders", orders());
    sheets.ok(
        "customers",
        json!([
            {"Customer ID": "C1", "Customer Name": "Aisha Karim", "Phone": "555-0101", "Address": "12 Palm St"},
            {"Customer ID": "C2", "Customer Name": "Omar Said", "Phone": "555-0102", "Address": "4 Cedar Ave"}
        ]),
    );
    let app = TestApp::spawn(sheets).await;

    let (_, html) = app.get_html("/customers").await;
    assert!(html.contains("orders not loaded"));
    assert_eq!(app.sheets.calls("orders", "read"), 0);

    app.get_html("/orders").await;
    let (_, html) = app.get_html("/customers").await;
    assert!(html.contains("Order statistics as of"));
    assert!(html.contains("$130.00"));
    assert!(html.contains("Mar 10, 2024"));
    assert!(html.contains("No orders"));
    assert_eq!(app.sheets.calls("orders", "read"), 1);
}
