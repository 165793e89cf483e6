//! # Keygate - User Management Service Library
//!
//! This is a facade crate that re-exports all public APIs from the keygate
//! components. Use this crate to get access to registration, activation,
//! login and logout functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! keygate = { path = "../keygate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `UserName`, `User`, etc.
//! - **Ports**: `UserStore`, `TokenIssuer`, `EmailClient`
//! - **Use cases**: `RegisterUseCase`, `ActivateUseCase`, `LoginUseCase`, `LogoutUseCase`
//! - **Adapters**: `PostgresUserStore`, `JwtTokenIssuer`, `PostmarkEmailClient`, etc.
//! - **Service**: `AuthService` - The main entry point for the service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use keygate_core::*;
}

// Re-export most commonly used core types at the root level
pub use keygate_core::{
    ActivationCode, ActivationCodeError, Email, Password, PendingUser, User, UserError, UserName,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use keygate_core::{
        AccessTokenClaims, EmailClient, PendingActivation, TokenIssuer, TokenIssuerError,
        UserStore, UserStoreError,
    };
}

// Re-export port traits at root level
pub use keygate_core::{EmailClient, TokenIssuer, TokenIssuerError, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use keygate_application::*;
}

// Re-export use cases at root level
pub use keygate_application::{ActivateUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and response envelopes
    pub mod http {
        pub use keygate_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use keygate_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use keygate_adapters::email::*;
    }

    /// Token issuing, cookies and the auth guard
    pub mod auth {
        pub use keygate_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use keygate_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use keygate_adapters::{
    auth::JwtTokenIssuer,
    email::{MockEmailClient, PostmarkEmailClient},
    persistence::{HashMapUserStore, PostgresUserStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use keygate_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
