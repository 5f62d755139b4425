mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::TestApp;
use serde_json::{Value, json};
use shared::model::Role;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

const MAKER_ID: i64 = 5;

fn order(id: i64, status: &str, price: Value, order_time: &str) -> Value {
    json!({
        "id": id,
        "maker_id": MAKER_ID,
        "eater_id": 7,
        "order_code": format!("48291{id}K7QZ"),
        "eater_name": "sam",
        "meal_name": "Laksa",
        "image_data": "data:image/png;base64,AAAA",
        "price": price,
        "order_time": order_time,
        "status": status,
    })
}

async fn mount_orders(app: &TestApp, orders: Value) {
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("maker_id", MAKER_ID.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders))
        .mount(&app.backend)
        .await;
}

#[tokio::test]
async fn home_combines_meals_and_todays_summary() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;
    let now = Utc::now().to_rfc3339();

    Mock::given(method("GET"))
        .and(path("/api/meals"))
        .and(query_param("maker_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 9, "maker_id": MAKER_ID, "title": "Laksa",
            "description": "Spicy", "price": 14.0, "image_data": "data:x",
        }])))
        .mount(&app.backend)
        .await;

    mount_orders(
        &app,
        json!([
            order(1, "completed", json!(12.5), &now),
            order(2, "completed", json!("7.5"), &now),
            order(3, "completed", json!(99.0), "2001-01-01T10:00:00Z"),
            order(4, "pending", json!(3.0), &now),
            order(5, "ready", json!(3.0), "garbage"),
        ]),
    )
    .await;

    let (status, body) = app.get("/api/maker/home", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let view = &body["data"];
    assert_eq!(view["greeting"], "Hi, chef!");
    assert_eq!(view["meals"].as_array().unwrap().len(), 1);
    assert_eq!(view["meals_error"], Value::Null);
    assert_eq!(
        view["summary"],
        json!({"revenueToday": 20.0, "completedToday": 2, "activeOrders": 2})
    );
}

#[tokio::test]
async fn home_reports_each_failure_on_its_own() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;

    Mock::given(method("GET"))
        .and(path("/api/meals"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.backend)
        .await;

    let (status, body) = app.get("/api/maker/home", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let view = &body["data"];
    assert_eq!(view["meals_error"], "Failed to load meals");
    assert_eq!(view["summary_error"], "Failed to load orders summary");
    assert_eq!(
        view["summary"],
        json!({"revenueToday": 0.0, "completedToday": 0, "activeOrders": 0})
    );
}

#[tokio::test]
async fn completing_an_order_patches_its_status() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;
    let now = Utc::now().to_rfc3339();

    mount_orders(&app, json!([order(3, "ready", json!(8.0), &now)])).await;

    Mock::given(method("PATCH"))
        .and(path("/api/orders/3"))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order(3, "completed", json!(8.0), &now)),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let (status, body) = app
        .post("/api/maker/orders/3/complete", Some(&token), json!({}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order marked as completed");
    assert_eq!(body["data"]["status"], "completed");
}

#[tokio::test]
async fn completed_order_cannot_complete_twice() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;
    let now = Utc::now().to_rfc3339();

    mount_orders(&app, json!([order(3, "completed", json!(8.0), &now)])).await;

    Mock::given(method("PATCH"))
        .and(path("/api/orders/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let (status, body) = app
        .post("/api/maker/orders/3/complete", Some(&token), json!({}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Order already completed");

    let (status, body) = app
        .post("/api/maker/orders/404/complete", Some(&token), json!({}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
}

#[tokio::test]
async fn add_meal_requires_an_image_and_a_price() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;

    Mock::given(method("POST"))
        .and(path("/api/meals"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend)
        .await;

    let (status, body) = app
        .post(
            "/api/maker/meals",
            Some(&token),
            json!({"title": "Laksa", "description": "Spicy", "price": "14"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please add an image for this meal.");

    let (status, _) = app
        .post(
            "/api/maker/meals",
            Some(&token),
            json!({"title": "Laksa", "description": "Spicy", "price": "abc", "image_data": "data:x"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_meal_trims_and_parses_the_form() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;

    Mock::given(method("POST"))
        .and(path("/api/meals"))
        .and(body_json(json!({
            "maker_id": MAKER_ID, "title": "Laksa", "description": "Spicy",
            "price": 14.5, "image_data": "data:x",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 21, "maker_id": MAKER_ID, "title": "Laksa",
            "description": "Spicy", "price": 14.5, "image_data": "data:x",
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let (status, body) = app
        .post(
            "/api/maker/meals",
            Some(&token),
            json!({"title": "  Laksa ", "description": " Spicy", "price": " 14.5 ", "image_data": "data:x"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Meal added");
    assert_eq!(body["data"]["id"], 21);
}

#[tokio::test]
async fn reply_is_only_sent_for_own_reviews() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;

    let review = json!({
        "id": 31, "maker_id": MAKER_ID, "eater_id": 7, "order_id": 3,
        "order_code": "482913K7QZ", "eater_name": "sam", "meal_name": "Laksa",
        "image_data": "data:x", "rating": 4, "comment": "Tasty", "reply": null,
        "created_at": "2025-03-01T09:00:00", "updated_at": "2025-03-01T09:00:00",
    });

    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .and(query_param("maker_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([review.clone()])))
        .mount(&app.backend)
        .await;

    let mut replied = review.clone();
    replied["reply"] = json!("Thanks Sam!");
    Mock::given(method("PATCH"))
        .and(path("/api/reviews/31"))
        .and(body_json(json!({"reply": "Thanks Sam!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(replied))
        .expect(1)
        .mount(&app.backend)
        .await;

    let (status, body) = app
        .post(
            "/api/maker/reviews/31/reply",
            Some(&token),
            json!({"reply": "Thanks Sam!"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Reply sent");
    assert_eq!(body["data"]["reply"], "Thanks Sam!");

    let (status, _) = app
        .post(
            "/api/maker/reviews/99/reply",
            Some(&token),
            json!({"reply": "Hello"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_falls_back_to_defaults_and_keeps_income() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;
    let now = Utc::now().to_rfc3339();

    Mock::given(method("GET"))
        .and(path("/api/maker/profile"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Profile not found"})))
        .mount(&app.backend)
        .await;
    mount_orders(&app, json!([order(1, "completed", json!(10.0), &now)])).await;

    let (status, body) = app.get("/api/maker/profile", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let view = &body["data"];
    assert_eq!(view["profile"]["name"], "Chef's Corner");
    assert_eq!(view["profile_error"], "Unable to load profile");
    assert_eq!(view["summary"]["revenueToday"], 10.0);
    assert_eq!(view["summary_error"], Value::Null);
}

#[tokio::test]
async fn saved_profile_becomes_the_session_fallback() {
    let app = TestApp::spawn().await;
    let token = app.login_as(MAKER_ID, "chef@mail.com", Role::Maker).await;

    let profile = json!({
        "name": "Nonna's Kitchen", "email": "chef@mail.com", "phone": "0400 000 000",
        "country": "Australia", "location": "Carlton VIC",
    });

    let mut saved = profile.clone();
    saved["maker_id"] = json!(MAKER_ID);
    Mock::given(method("PUT"))
        .and(path("/api/maker/profile"))
        .and(body_json(saved.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(saved))
        .expect(1)
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/maker/profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;
    mount_orders(&app, json!([])).await;

    let (status, body) = app.put("/api/maker/profile", Some(&token), profile).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Profile updated");

    let (_, body) = app.get("/api/maker/profile", Some(&token)).await;
    assert_eq!(body["data"]["profile"]["name"], "Nonna's Kitchen");
    assert_eq!(body["data"]["profile_error"], "Unable to load profile");
}
