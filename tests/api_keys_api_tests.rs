//! API key integration tests

mod common;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use serde_json::{Value, json};

use bookmarks_service::utils::{API_KEY_ID_LEN, API_KEY_SECRET_LEN};
use common::{TestEnv, basic, user_auth};

#[actix_rt::test]
async fn test_create_api_key() {
    let env = TestEnv::new().await;
    let user = env.seed_user("Ada", "ada@example.com", "ada-password").await;
    let app = test::init_service(env.app()).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api_keys")
            .insert_header((header::AUTHORIZATION, user_auth(&user, "ada-password")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api_keys");

    let body: Value = test::read_body_json(resp).await;
    let id = body["api_key"]["id"].as_str().unwrap();
    let secret = body["api_key"]["secret"].as_str().unwrap();
    assert_eq!(id.len(), API_KEY_ID_LEN);
    assert_eq!(secret.len(), API_KEY_SECRET_LEN);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["api_key"]["user_id"], user.id);

    let stored = env.storage.get_api_key(id).await.unwrap().unwrap();
    assert_eq!(stored.secret, secret);
}

#[actix_rt::test]
async fn test_api_keys_require_login() {
    let env = TestEnv::new().await;
    let user = env.seed_user("Ada", "ada@example.com", "ada-password").await;
    let key = env.seed_api_key(user.id).await;
    let app = test::init_service(env.app()).await;

    let resp = test::call_service(&app, TestRequest::post().uri("/api_keys").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Missing or malformed Basic authentication credentials"
    );

    // an API key cannot mint more keys
    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api_keys")
            .insert_header((header::AUTHORIZATION, basic(&key.id, &key.secret)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // neither can the super user
    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api_keys")
            .insert_header((header::AUTHORIZATION, env.super_user_auth()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_list_api_keys_only_own() {
    let env = TestEnv::new().await;
    let ada = env.seed_user("Ada", "ada@example.com", "ada-password").await;
    let bob = env.seed_user("Bob", "bob@example.com", "bob-password").await;
    let app = test::init_service(env.app()).await;

    let list = |user, password: &str| {
        TestRequest::get()
            .uri("/api_keys")
            .insert_header((header::AUTHORIZATION, user_auth(user, password)))
            .to_request()
    };

    let resp = test::call_service(&app, list(&ada, "ada-password")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "api_keys": [] }));

    let a1 = env.seed_api_key(ada.id).await;
    let a2 = env.seed_api_key(ada.id).await;
    let b1 = env.seed_api_key(bob.id).await;

    let resp = test::call_service(&app, list(&ada, "ada-password")).await;
    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = body["api_keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a1.id.as_str()));
    assert!(ids.contains(&a2.id.as_str()));
    assert!(!ids.contains(&b1.id.as_str()));

    let resp = test::call_service(&app, list(&bob, "bob-password")).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["api_keys"][0]["secret"], b1.secret.as_str());
}

#[actix_rt::test]
async fn test_issued_key_authenticates_bookmarks() {
    let env = TestEnv::new().await;
    let user = env.seed_user("Ada", "ada@example.com", "ada-password").await;
    let app = test::init_service(env.app()).await;

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api_keys")
            .insert_header((header::AUTHORIZATION, user_auth(&user, "ada-password")))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let id = body["api_key"]["id"].as_str().unwrap().to_string();
    let secret = body["api_key"]["secret"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/bookmarks")
            .insert_header((header::AUTHORIZATION, basic(&id, &secret)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // the secret comparison is exact
    let flipped: String = secret
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/bookmarks")
            .insert_header((header::AUTHORIZATION, basic(&id, &flipped)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
