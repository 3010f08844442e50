mod common;

use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn select_cctv_section(app: &TestApp) {
    let response = app.post_form("/sections", &[("section", "CCTV")]).await;
    assert!(response.status().is_redirection());
}

fn inventory_body() -> serde_json::Value {
    json!({
        "inventory": [
            {
                "id": 1,
                "product_name": "HDMI Cable",
                "description": "1.5m",
                "quantity": 12,
                "status": "Ready",
                "price": 150.0,
                "selling_price": 200.0,
                "categories": "CCTV",
                "location": "Nanded"
            },
            {
                "id": 2,
                "product_name": "Dome Camera",
                "description": "2MP",
                "quantity": 4,
                "status": "Ready",
                "price": 1800.0,
                "categories": "CCTV",
                "location": "Nanded"
            }
        ]
    })
}

#[tokio::test]
async fn list_filters_rows_by_case_insensitive_substring() {
    let app = TestApp::spawn().await;
    app.log_in().await;
    select_cctv_section(&app).await;

    Mock::given(method("GET"))
        .and(path("/list/Nanded/CCTV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inventory_body()))
        .mount(&app.backend)
        .await;

    let body = app.get("/products?q=hdmi").await.text().await.unwrap();
    assert!(body.contains("HDMI Cable"));
    assert!(!body.contains("Dome Camera"));

    let body = app.get("/products").await.text().await.unwrap();
    assert!(body.contains("HDMI Cable"));
    assert!(body.contains("Dome Camera"));
}

#[tokio::test]
async fn list_read_failure_leaves_the_view_usable() {
    let app = TestApp::spawn().await;
    app.log_in().await;
    select_cctv_section(&app).await;

    Mock::given(method("GET"))
        .and(path("/list/Nanded/CCTV"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })))
        .mount(&app.backend)
        .await;

    let response = app.get("/products").await;
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("db down"));
    assert!(body.contains("No products found."));
}

#[tokio::test]
async fn creating_a_product_posts_the_typed_payload() {
    let app = TestApp::spawn().await;
    app.log_in().await;
    select_cctv_section(&app).await;

    Mock::given(method("POST"))
        .and(path("/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "added" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form(
            "/products",
            &[
                ("product_name", "Bullet Camera"),
                ("description", "4MP"),
                ("quantity", "6"),
                ("status", "Ready"),
                ("price", "2400.50"),
            ],
        )
        .await;
    assert!(response.status().is_redirection());

    let requests = app.backend.received_requests().await.unwrap();
    let submitted = requests
        .iter()
        .find(|request| request.url.path() == "/add")
        .expect("product payload was posted");
    let payload: serde_json::Value = serde_json::from_slice(&submitted.body).unwrap();
    assert_eq!(payload["product_name"], "Bullet Camera");
    assert_eq!(payload["quantity"], json!(6));
    assert_eq!(payload["price"], json!(2400.5));
    assert_eq!(payload["categories"], "CCTV");
    assert_eq!(payload["location"], "Nanded");
}

#[tokio::test]
async fn invalid_product_input_is_blocked_before_any_call() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("POST"))
        .and(path("/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "added" })))
        .expect(0)
        .mount(&app.backend)
        .await;

    let body = app
        .post_form(
            "/products",
            &[
                ("product_name", "Bullet Camera"),
                ("quantity", "6"),
                ("price", "free"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Price must be a positive number!"));

    let body = app
        .post_form(
            "/products",
            &[("product_name", "  "), ("quantity", "6"), ("price", "10")],
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Product name cannot be empty!"));
}

#[tokio::test]
async fn updating_a_product_uses_the_update_endpoint() {
    let app = TestApp::spawn().await;
    app.log_in().await;
    select_cctv_section(&app).await;

    Mock::given(method("PUT"))
        .and(path("/update/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "updated" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form(
            "/products/2",
            &[
                ("product_name", "Dome Camera"),
                ("description", "2MP refreshed"),
                ("quantity", "5"),
                ("status", "Ready"),
                ("price", "1750"),
            ],
        )
        .await;
    assert!(response.status().is_redirection());
}

#[tokio::test]
async fn stock_adjustment_hits_the_stock_endpoint() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("PUT"))
        .and(path("/update-stock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app
        .post_form("/products/2/stock", &[("quantity", "9")])
        .await;
    assert!(response.status().is_redirection());

    let requests = app.backend.received_requests().await.unwrap();
    let update = requests
        .iter()
        .find(|request| request.url.path() == "/update-stock")
        .expect("stock update was sent");
    let payload: serde_json::Value = serde_json::from_slice(&update.body).unwrap();
    assert_eq!(payload["id"], json!(2));
    assert_eq!(payload["quantity"], json!(9));
}

#[tokio::test]
async fn deleting_a_product_calls_the_backend_then_refreshes() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("DELETE"))
        .and(path("/delete/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/products/1/delete", &[]).await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/products");
}

#[tokio::test]
async fn section_picker_falls_back_when_the_backend_is_down() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("GET"))
        .and(path("/get-sections"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "down" })))
        .mount(&app.backend)
        .await;

    let body = app.get("/sections").await.text().await.unwrap();
    assert!(body.contains("Accessories Section"));
    assert!(body.contains("CCTV Section"));
}

#[tokio::test]
async fn section_picker_lists_backend_sections() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("GET"))
        .and(path("/get-sections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sections": ["Accessories Section", "CCTV Section", "Networking Section"]
        })))
        .mount(&app.backend)
        .await;

    let body = app.get("/sections").await.text().await.unwrap();
    assert!(body.contains("Networking Section"));
}
