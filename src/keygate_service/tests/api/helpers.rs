use keygate_adapters::{
    auth::{JwtTokenIssuer, TokenConfig},
    email::MockEmailClient,
    persistence::HashMapUserStore,
};
use keygate_service::AuthService;
use regex::Regex;
use secrecy::Secret;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub email_client: MockEmailClient,
}

impl TestApp {
    /// Spawn the service on a random port with in-memory collaborators.
    pub async fn spawn() -> Self {
        let user_store = HashMapUserStore::new();
        let token_issuer = JwtTokenIssuer::new(TokenConfig {
            activation_secret: Secret::from("test-activation-secret".to_string()),
            access_secret: Secret::from("test-access-secret".to_string()),
            access_ttl_seconds: 600,
            refresh_secret: Secret::from("test-refresh-secret".to_string()),
            refresh_ttl_seconds: 86_400,
        });
        let email_client = MockEmailClient::new();

        let service = AuthService::new(user_store, token_issuer, email_client.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to a random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            service
                .run(listener, None)
                .await
                .expect("Auth service stopped unexpectedly")
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            email_client,
        }
    }

    pub async fn post_registration(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/v1/users/registration", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute registration request")
    }

    pub async fn post_activate(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/v1/users/activate-user", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute activation request")
    }

    pub async fn post_login(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/v1/users/login-user", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Logout with the access token in the Authorization header. The test
    /// client talks plain http, so the Secure session cookies never travel
    /// back and the header fallback is exercised instead.
    pub async fn post_logout(&self, access_token: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/v1/users/logout-user", self.address))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .expect("Failed to execute logout request")
    }

    /// Pull the four digit activation code out of the most recent email.
    pub async fn last_activation_code(&self) -> String {
        let emails = self.email_client.sent_emails().await;
        let email = emails.last().expect("No activation email was sent");

        let code_pattern = Regex::new(r"\b(\d{4})\b").unwrap();
        code_pattern
            .find(&email.content)
            .expect("No activation code in the email body")
            .as_str()
            .to_string()
    }

    /// Run the full registration and activation flow for a fresh user and
    /// return the activation token it produced.
    pub async fn register_activated_user(
        &self,
        user_name: &str,
        email: &str,
        password: &str,
    ) -> String {
        let response = self
            .post_registration(&serde_json::json!({
                "userName": user_name,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.unwrap();
        let activation_token = body["data"]["activationToken"].as_str().unwrap().to_string();
        let activation_code = self.last_activation_code().await;

        let response = self
            .post_activate(&serde_json::json!({
                "activation_token": activation_token,
                "activation_code": activation_code,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        activation_token
    }
}
