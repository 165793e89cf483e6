pub mod response;
pub mod routes;

pub use response::{ApiResponse, UserResponse};
pub use routes::{ApiError, activate, login, logout, register};
