pub mod cookies;
pub mod guard;
pub mod jwt_token_issuer;

pub use cookies::{
    ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, create_removal_cookie, create_session_cookie,
};
pub use guard::{AuthGuardError, authorize, extract_access_token};
pub use jwt_token_issuer::{ACTIVATION_TOKEN_TTL_SECONDS, JwtTokenIssuer, TokenConfig};
