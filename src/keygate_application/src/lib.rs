pub mod use_cases;

pub use use_cases::{
    activate::{ActivateError, ActivateUseCase},
    login::{LoginError, LoginResponse, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{ACTIVATION_EMAIL_SUBJECT, RegisterError, RegisterResponse, RegisterUseCase},
};
