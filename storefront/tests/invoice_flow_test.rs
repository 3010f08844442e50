mod common;

use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn invoice_form<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("party_name", "Joshi Stores"),
        ("contact_number", "9011223344"),
        ("document_number", "INV-1741900000000"),
        ("date", "2025-03-14"),
    ]
}

#[tokio::test]
async fn saving_an_invoice_posts_the_ledger_and_resets() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("POST"))
        .and(path("/save-invoice"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Invoice saved" })),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let mut item = invoice_form();
    item.extend([
        ("item_name", "HDMI Cable"),
        ("item_description", "1.5m"),
        ("item_quantity", "2"),
        ("item_unit_price", "200"),
    ]);
    app.post_form("/invoices/items", &item).await;

    let mut form = invoice_form();
    form.push(("paid", "100"));
    let body = app
        .post_form("/invoices", &form)
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Invoice saved"));
    assert!(body.contains("No products added yet."));

    let requests = app.backend.received_requests().await.unwrap();
    let submitted = requests
        .iter()
        .find(|request| request.url.path() == "/save-invoice")
        .expect("invoice payload was posted");
    let payload: serde_json::Value = serde_json::from_slice(&submitted.body).unwrap();
    assert_eq!(payload["customer_name"], "Joshi Stores");
    assert_eq!(payload["invoice_number"], "INV-1741900000000");
    assert_eq!(payload["total_price"], json!(400.0));
    assert_eq!(payload["paid"], json!(100.0));
}

#[tokio::test]
async fn invoice_submit_with_missing_fields_makes_no_backend_call() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("POST"))
        .and(path("/save-invoice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(0)
        .mount(&app.backend)
        .await;

    let mut item = invoice_form();
    item.extend([
        ("item_name", "HDMI Cable"),
        ("item_quantity", "1"),
        ("item_unit_price", "200"),
    ]);
    app.post_form("/invoices/items", &item).await;

    let body = app
        .post_form(
            "/invoices",
            &[
                ("party_name", ""),
                ("contact_number", "9011223344"),
                ("document_number", "INV-1741900000000"),
                ("date", "2025-03-14"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("All fields are required!"));
}

#[tokio::test]
async fn the_detail_view_renders_the_persisted_invoice() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("GET"))
        .and(path("/invoice-details/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_name": "Joshi Stores",
            "mobile_number": "9011223344",
            "invoice_number": "INV-1700000000001",
            "date": "2025-03-01",
            "products": [
                {
                    "product_name": "HDMI Cable",
                    "description": "1.5m",
                    "quantity": 2.0,
                    "price": 200.0,
                    "subtotal": 400.0
                }
            ],
            "total": 400.0,
            "paid": 100.0,
            "due": 300.0,
            "created_by": "admin"
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let body = app.get("/invoices/9").await.text().await.unwrap();
    assert!(body.contains("INV-1700000000001"));
    assert!(body.contains("Joshi Stores"));
    assert!(body.contains("HDMI Cable"));
    assert!(body.contains("400"));
}

#[tokio::test]
async fn invoice_list_is_searchable() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("GET"))
        .and(path("/invoice-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "invoices": [
                {
                    "id": 9,
                    "invoice_number": "INV-1",
                    "customer_name": "Joshi Stores",
                    "invoice_date": "2025-03-01",
                    "total": 400.0,
                    "paid": 100.0,
                    "due": 300.0,
                    "payment_status": "Due",
                    "created_by": "admin"
                },
                {
                    "id": 10,
                    "invoice_number": "INV-2",
                    "customer_name": "Kulkarni Traders",
                    "invoice_date": "2025-03-02",
                    "total": 900.0,
                    "paid": 900.0,
                    "due": 0.0,
                    "payment_status": "Paid",
                    "created_by": "admin"
                }
            ]
        })))
        .mount(&app.backend)
        .await;

    let body = app.get("/invoices?q=joshi").await.text().await.unwrap();
    assert!(body.contains("Joshi Stores"));
    assert!(!body.contains("Kulkarni Traders"));
}

#[tokio::test]
async fn deleting_an_invoice_calls_the_backend_then_refreshes() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("DELETE"))
        .and(path("/delete-invoice/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/invoices/9/delete", &[]).await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/invoices");
}
