mod common;

use common::TestApp;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn quotation_form<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("party_name", "Deshmukh Electronics"),
        ("contact_number", "9123456780"),
        ("document_number", "QUO-1741900000000"),
        ("date", "2025-03-14"),
    ]
}

#[tokio::test]
async fn creating_a_quotation_posts_the_camel_case_payload() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("POST"))
        .and(path("/add-quotation"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Quotation added" })),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let mut item = quotation_form();
    item.extend([
        ("item_name", "Dome Camera"),
        ("item_description", "2MP"),
        ("item_quantity", "2"),
        ("item_unit_price", "1800"),
    ]);
    app.post_form("/quotations/items", &item).await;

    let body = app
        .post_form("/quotations", &quotation_form())
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Quotation added"));
    assert!(body.contains("No products added yet."));

    let requests = app.backend.received_requests().await.unwrap();
    let submitted = requests
        .iter()
        .find(|request| request.url.path() == "/add-quotation")
        .expect("quotation payload was posted");
    let payload: serde_json::Value = serde_json::from_slice(&submitted.body).unwrap();
    assert_eq!(payload["CustomerName"], "Deshmukh Electronics");
    assert_eq!(payload["mobileNumber"], "9123456780");
    assert_eq!(payload["quotationNumber"], "QUO-1741900000000");
    assert_eq!(payload["quotationDate"], "2025-03-14");
    assert_eq!(payload["totalPrice"], json!(3600.0));
    assert_eq!(payload["createdBy"], "admin");
}

#[tokio::test]
async fn quotation_submit_without_items_makes_no_backend_call() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("POST"))
        .and(path("/add-quotation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(0)
        .mount(&app.backend)
        .await;

    let body = app
        .post_form("/quotations", &quotation_form())
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Please add at least one product!"));
}

#[tokio::test]
async fn editing_loads_the_persisted_quotation_into_the_draft() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("GET"))
        .and(path("/quotation-details/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_name": "Deshmukh Electronics",
            "mobile_number": "9123456780",
            "quotation_number": "QUO-1700000000000",
            "date": "2025-02-01",
            "products": [
                {
                    "product_name": "Dome Camera",
                    "description": "2MP",
                    "quantity": 2.0,
                    "price": 1800.0,
                    "subtotal": 3600.0
                }
            ],
            "total": 3600.0,
            "created_by": "admin"
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.get("/quotations/5/edit").await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/quotations/new");

    let body = app.get("/quotations/new").await.text().await.unwrap();
    assert!(body.contains("Deshmukh Electronics"));
    assert!(body.contains("QUO-1700000000000"));
    assert!(body.contains("Dome Camera"));
    assert!(body.contains("3600"));
}

#[tokio::test]
async fn submitting_an_edited_quotation_updates_the_persisted_record() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    Mock::given(method("GET"))
        .and(path("/quotation-details/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_name": "Deshmukh Electronics",
            "mobile_number": "9123456780",
            "quotation_number": "QUO-1700000000000",
            "date": "2025-02-01",
            "products": [
                {
                    "product_name": "Dome Camera",
                    "description": "2MP",
                    "quantity": 2.0,
                    "price": 1800.0,
                    "subtotal": 3600.0
                }
            ],
            "total": 3600.0,
            "created_by": "admin"
        })))
        .mount(&app.backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/update-quotation/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "updated" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.get("/quotations/5/edit").await;

    let mut form = quotation_form();
    form[2] = ("document_number", "QUO-1700000000000");
    let response = app.post_form("/quotations", &form).await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/quotations");

    // a later submit starts a fresh create, not another update
    Mock::given(method("POST"))
        .and(path("/add-quotation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(0)
        .mount(&app.backend)
        .await;
    let body = app
        .post_form("/quotations", &quotation_form())
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Please add at least one product!"));
}

#[tokio::test]
async fn quotation_list_is_scoped_to_location_and_section() {
    let app = TestApp::spawn().await;
    app.log_in().await;

    let response = app.post_form("/sections", &[("section", "CCTV")]).await;
    assert!(response.status().is_redirection());

    Mock::given(method("GET"))
        .and(path("/quotation-list/Nanded/CCTV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quotations": [
                {
                    "id": 5,
                    "quotation_number": "QUO-1700000000000",
                    "customer_name": "Deshmukh Electronics",
                    "date": "2025-02-01",
                    "mobile_number": "9123456780",
                    "total": 3600.0,
                    "location": "Nanded",
                    "created_by": "admin"
                }
            ]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let body = app.get("/quotations").await.text().await.unwrap();
    assert!(body.contains("Deshmukh Electronics"));
}
