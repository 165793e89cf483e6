use crate::helpers::TestApp;

#[tokio::test]
async fn test_logout_clears_the_session_cookies() {
    let app = TestApp::spawn().await;
    app.register_activated_user("abc", "a@b.com", "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "email": "a@b.com", "password": "pw1" }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    let access_token = body["data"]["accessToken"].as_str().unwrap().to_string();

    let response = app.post_logout(&access_token).await;
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
            .unwrap_or_else(|| panic!("Missing {name} removal cookie"));
        assert!(cookie.contains("Max-Age=0"));
    }

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_logout_without_a_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app
        .http_client
        .post(format!("{}/api/v1/users/logout-user", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_logout_with_a_garbage_token_is_unauthorized() {
    let app = TestApp::spawn().await;

    let response = app.post_logout("not-a-jwt").await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_logout_twice_with_a_still_valid_token_succeeds() {
    let app = TestApp::spawn().await;
    app.register_activated_user("abc", "a@b.com", "pw1").await;

    let response = app
        .post_login(&serde_json::json!({ "email": "a@b.com", "password": "pw1" }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    let access_token = body["data"]["accessToken"].as_str().unwrap().to_string();

    // Access tokens stay valid until expiry; clearing an already cleared
    // refresh token is a no-op, not an error.
    assert_eq!(app.post_logout(&access_token).await.status().as_u16(), 200);
    assert_eq!(app.post_logout(&access_token).await.status().as_u16(), 200);
}
