use crate::helpers::TestApp;

#[tokio::test]
async fn test_registration_returns_an_activation_token_and_sends_an_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post_registration(&serde_json::json!({
            "userName": "abc",
            "email": "a@b.com",
            "password": "pw1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["success"], true);
    assert!(body["data"]["activationToken"].is_string());

    let emails = app.email_client.sent_emails().await;
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, "a@b.com");

    let code = app.last_activation_code().await;
    assert_eq!(code.len(), 4);
}

#[tokio::test]
async fn test_registration_with_missing_fields_is_rejected() {
    let app = TestApp::spawn().await;

    for body in [
        serde_json::json!({ "email": "a@b.com", "password": "pw1" }),
        serde_json::json!({ "userName": "abc", "password": "pw1" }),
        serde_json::json!({ "userName": "abc", "email": "a@b.com" }),
    ] {
        let response = app.post_registration(&body).await;
        assert_eq!(response.status().as_u16(), 400);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
    }

    assert!(app.email_client.sent_emails().await.is_empty());
}

#[tokio::test]
async fn test_activation_creates_the_user_without_exposing_secrets() {
    let app = TestApp::spawn().await;

    let response = app
        .post_registration(&serde_json::json!({
            "userName": "abc",
            "email": "a@b.com",
            "password": "pw1",
        }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    let activation_token = body["data"]["activationToken"].as_str().unwrap();
    let activation_code = app.last_activation_code().await;

    let response = app
        .post_activate(&serde_json::json!({
            "activation_token": activation_token,
            "activation_code": activation_code,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    let user = &body["data"];
    assert_eq!(user["userName"], "abc");
    assert_eq!(user["email"], "a@b.com");
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("refreshToken").is_none());
}

#[tokio::test]
async fn test_activation_with_a_wrong_code_creates_no_user() {
    let app = TestApp::spawn().await;

    let response = app
        .post_registration(&serde_json::json!({
            "userName": "abc",
            "email": "a@b.com",
            "password": "pw1",
        }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    let activation_token = body["data"]["activationToken"].as_str().unwrap().to_string();

    let real_code = app.last_activation_code().await;
    let wrong_code = if real_code == "9999" { "1000" } else { "9999" };

    let response = app
        .post_activate(&serde_json::json!({
            "activation_token": activation_token,
            "activation_code": wrong_code,
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    // No record was created, so the login lookup misses.
    let response = app
        .post_login(&serde_json::json!({ "email": "a@b.com", "password": "pw1" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_activation_with_a_garbage_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .post_activate(&serde_json::json!({
            "activation_token": "not-a-jwt",
            "activation_code": "1234",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_registering_an_already_activated_identity_is_rejected() {
    let app = TestApp::spawn().await;
    app.register_activated_user("abc", "a@b.com", "pw1").await;

    let response = app
        .post_registration(&serde_json::json!({
            "userName": "other",
            "email": "a@b.com",
            "password": "pw1",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .post_registration(&serde_json::json!({
            "userName": "abc",
            "email": "other@b.com",
            "password": "pw1",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
