use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use keygate_adapters::{
    config::AllowedOrigins,
    http::routes::{activate, login, logout, register},
};
use keygate_core::{EmailClient, TokenIssuer, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// User management service exposing registration, activation, login and
/// logout routes.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Wire the routes to their collaborators. Each route receives only the
    /// state it needs; stores and clients are Clone via internal sharing.
    pub fn new<U, I, E>(user_store: U, token_issuer: I, email_client: E) -> Self
    where
        U: UserStore + Clone + 'static,
        I: TokenIssuer + Clone + 'static,
        E: EmailClient + Clone + 'static,
    {
        let router = Router::new()
            .route("/registration", post(register::<U, I, E>))
            .with_state((user_store.clone(), token_issuer.clone(), email_client))
            .route("/activate-user", post(activate::<U, I>))
            .with_state((user_store.clone(), token_issuer.clone()))
            .route("/login-user", post(login::<U, I>))
            .with_state((user_store.clone(), token_issuer.clone()))
            .route("/logout-user", post(logout::<U, I>))
            .with_state((user_store, token_issuer));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be nested under another application.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server with the routes mounted under
    /// `/api/v1/users`.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = Router::new().nest("/api/v1/users", self.as_nested_router(allowed_origins));

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
