pub mod auth_service;
pub mod helpers;
pub mod tracing;

pub use auth_service::AuthService;
pub use helpers::{configure_postgresql, get_postgres_pool};
pub use tracing::init_tracing;
