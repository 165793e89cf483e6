use keygate_adapters::{
    auth::JwtTokenIssuer, config::Settings, email::PostmarkEmailClient,
    persistence::PostgresUserStore,
};
use keygate_core::Email;
use keygate_service::{AuthService, configure_postgresql, init_tracing};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    dotenvy::dotenv().ok();
    init_tracing().expect("Failed to initialize tracing");

    let settings = Settings::load()?;

    let pg_pool = configure_postgresql(settings.postgres.url.expose_secret()).await?;
    let user_store = PostgresUserStore::new(pg_pool);

    let token_issuer = JwtTokenIssuer::new(settings.auth.token_config());

    let http_client = HttpClient::builder()
        .timeout(settings.email_client.timeout())
        .build()?;
    let email_client = PostmarkEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::try_from(Secret::from(settings.email_client.sender.clone()))?,
        settings.email_client.auth_token.clone(),
        http_client,
    );

    let auth_service = AuthService::new(user_store, token_issuer, email_client);

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    auth_service
        .run(listener, settings.application.allowed_origins)
        .await?;

    Ok(())
}
