pub mod activation_code;
pub mod email;
pub mod password;
pub mod user;
pub mod user_name;
