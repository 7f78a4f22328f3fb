use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use flea_market::routes;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .app_data(web::Data::new(common::jwt_settings()))
                .configure(routes::configure),
        )
        .await
    };
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_sign_up_then_sign_in_issues_token() {
    let test_db = common::TestDb::new("test_routes_sign_in.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({
            "name": "Hanako",
            "email": "hanako@example.com",
            "password": "secret-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "hanako@example.com");
    assert_eq!(body["status"], "FREE");
    assert!(body.get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({ "email": "hanako@example.com", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({ "email": "hanako@example.com", "password": "secret-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[actix_web::test]
async fn test_create_region_requires_token() {
    let test_db = common::TestDb::new("test_routes_region_auth.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/regions")
        .set_json(json!({
            "code": "03",
            "name": "Kanto",
            "kanaName": "カントウ",
            "kanaEn": "kanto",
            "status": "published",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 401);

    let req = test::TestRequest::post()
        .uri("/regions")
        .insert_header(bearer("not-a-token"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_authenticated_store_creation_and_listing() {
    let test_db = common::TestDb::new("test_routes_stores.db");
    let repo = test_db.repo();
    common::seed_user(&repo, "owner@example.com");
    let token = flea_market::services::auth::sign_in(
        &repo,
        serde_json::from_value(json!({
            "email": "owner@example.com",
            "password": "secret-password",
        }))
        .unwrap(),
        &common::jwt_settings(),
    )
    .unwrap();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/prefectures")
        .insert_header(bearer(&token))
        .set_json(json!({
            "code": "13",
            "name": "東京都",
            "kanaName": "トウキョウト",
            "kanaEn": "tokyo",
            "status": "published",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let mut store_ids = Vec::new();
    for name in ["Alpha", "Bravo", "Charlie"] {
        let req = test::TestRequest::post()
            .uri("/stores")
            .insert_header(bearer(&token))
            .set_json(json!({
                "name": name,
                "status": "published",
                "email": "shop@example.com",
                "phoneNumber": "0312345678",
                "prefectureCode": "13",
                "holidays": ["SATURDAY"],
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusLabel"], "営業中");
        assert_eq!(body["holidaysLabel"], json!(["土"]));
        assert_eq!(body["prefecture"]["code"], "13");
        store_ids.push(body["id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::get()
        .uri(&format!("/stores/{}", store_ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Alpha");

    let req = test::TestRequest::get().uri("/prefectures/code/13").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kanaEn"], "tokyo");

    let req = test::TestRequest::get().uri("/prefectures").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/stores?page=2&size=2&sortBy=name&sortOrder=asc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["meta"], json!({ "totalCount": 3, "page": 2, "size": 2 }));
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["name"], "Charlie");

    let req = test::TestRequest::get()
        .uri("/prefectures/with-store-count?scope=all")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["storeCount"], 3);
}

#[actix_web::test]
async fn test_unknown_prefecture_code_on_store_is_not_found() {
    let test_db = common::TestDb::new("test_routes_unknown_prefecture.db");
    let repo = test_db.repo();
    let user = common::seed_user(&repo, "owner@example.com");
    let claims = flea_market::models::auth::Claims {
        sub: user.id.to_string(),
        user_name: user.name,
        status: user.status,
        iat: chrono::Utc::now().timestamp(),
        exp: chrono::Utc::now().timestamp() + 600,
    };
    let token = flea_market::models::auth::encode_token(&claims, &common::jwt_settings()).unwrap();
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/stores")
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "Ghost",
            "status": "editing",
            "email": "ghost@example.com",
            "phoneNumber": "0000",
            "prefectureCode": "99",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 404);
}

#[actix_web::test]
async fn test_malformed_input_is_bad_request() {
    let test_db = common::TestDb::new("test_routes_bad_request.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/items/not-a-uuid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/stores?sortBy=price")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({ "name": "", "email": "nope", "password": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].as_array().is_some_and(|m| m.len() == 3));
}

#[actix_web::test]
async fn test_missing_region_is_not_found() {
    let test_db = common::TestDb::new("test_routes_missing_region.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/regions/code/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/regions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_store_list_clamps_window_and_rejects_unknown_tokens() {
    let test_db = common::TestDb::new("test_routes_store_window.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/stores?size=-5&page=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["meta"], json!({ "totalCount": 0, "page": 1, "size": 1 }));

    let req = test::TestRequest::get()
        .uri("/stores?size=1000&page=99999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["meta"], json!({ "totalCount": 0, "page": 10000, "size": 100 }));

    for uri in [
        "/stores?status=bogus",
        "/stores?sortOrder=sideways",
        "/prefectures/with-store-count?scope=bogus",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}
