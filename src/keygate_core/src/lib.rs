pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    activation_code::{ActivationCode, ActivationCodeError},
    email::Email,
    password::Password,
    user::{DEFAULT_ROLE, PendingUser, User, UserError},
    user_name::UserName,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::EmailClient,
    tokens::{AccessTokenClaims, PendingActivation, TokenIssuer, TokenIssuerError},
};
