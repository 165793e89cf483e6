use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_returns_tokens_and_sets_session_cookies() {
    let app = TestApp::spawn().await;
    app.register_activated_user("abc", "a@b.com", "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "email": "a@b.com", "password": "pw1" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);

    let cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect();
    assert_eq!(cookies.len(), 2);

    for name in ["accessToken", "refreshToken"] {
        let cookie = cookies
            .iter()
            .find(|cookie| cookie.starts_with(&format!("{name}=")))
            .unwrap_or_else(|| panic!("Missing {name} cookie"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["success"], true);
    assert!(body["data"]["accessToken"].is_string());
    assert!(body["data"]["refreshToken"].is_string());
    assert_eq!(body["data"]["user"]["userName"], "abc");
    assert_eq!(body["data"]["user"]["email"], "a@b.com");
    assert!(body["data"]["user"].get("passwordHash").is_none());
    assert!(body["data"]["user"].get("refreshToken").is_none());
}

#[tokio::test]
async fn test_login_with_a_wrong_password_is_unauthorized() {
    let app = TestApp::spawn().await;
    app.register_activated_user("abc", "a@b.com", "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "email": "a@b.com", "password": "wrong" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_login_with_an_unknown_email_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .post_login(&serde_json::json!({ "email": "nobody@b.com", "password": "pw1" }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_login_with_missing_fields_is_rejected() {
    let app = TestApp::spawn().await;

    for body in [
        serde_json::json!({ "email": "a@b.com" }),
        serde_json::json!({ "password": "pw1" }),
    ] {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 400);
    }
}
