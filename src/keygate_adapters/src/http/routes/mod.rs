pub mod activate;
pub mod error;
pub mod login;
pub mod logout;
pub mod register;

pub use activate::activate;
pub use error::ApiError;
pub use login::login;
pub use logout::logout;
pub use register::register;
