pub mod activate;
pub mod login;
pub mod logout;
pub mod register;
